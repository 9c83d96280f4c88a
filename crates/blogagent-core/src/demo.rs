//! Deterministic demo content.
//!
//! When the backend is unreachable the user can opt into demo mode,
//! which fabricates placeholder markdown locally instead of issuing a
//! request. The output is a pure function of the request: identical
//! inputs always produce identical markdown. Demo content is never
//! substituted silently for a failed request; it is only reachable
//! through the explicit demo flag or config setting.

use crate::form::GenerateRequest;
use crate::state::GenerationResult;

/// Fabricate placeholder markdown for `request`.
#[must_use]
pub fn placeholder(request: &GenerateRequest) -> GenerationResult {
    let mut content = format!("# {}\n", request.title);

    if !request.keywords.is_empty() {
        content.push_str(&format!("\n*Keywords: {}*\n", request.keywords));
    }
    content.push_str(&format!("\n*Tone: {}*\n", request.tone.label()));

    content.push_str(&format!(
        "\n## Introduction\n\n\
         Welcome to this comprehensive guide about **{title}**. In today's \
         digital landscape, understanding this topic is crucial for success.\n\
         \n\
         ## Key Points\n\
         \n\
         1. **First Important Aspect**: This section covers the fundamental \
         concepts you need to know.\n\
         \n\
         2. **Implementation Strategy**: Here's how you can apply these \
         concepts in real-world scenarios.\n\
         \n\
         3. **Best Practices**: Follow these guidelines to achieve optimal \
         results.\n\
         \n\
         ## Benefits\n\
         \n\
         - Enhanced understanding of the subject matter\n\
         - Practical applications for immediate use\n\
         - Long-term value for your projects\n\
         \n\
         ## Conclusion\n\
         \n\
         {title} is an essential topic that deserves careful consideration. \
         By following the guidelines outlined in this post, you'll be \
         well-equipped to tackle any challenges that come your way.\n\
         \n\
         ---\n\
         \n\
         *Generated by BlogAgent demo mode - no backend was contacted*\n",
        title = request.title
    ));

    GenerationResult::new(content)
}
