use super::kinds::{Image, Link};

/// Returns every `(alt, destination)` pair of image syntax in `text`, in order.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    Image::pattern()
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Returns every `(text, destination)` pair of link syntax in `text`, in order.
///
/// Image syntax is skipped, so `![a](b)` never yields a link.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    Link::pattern()
        .captures_iter(text)
        .filter(|caps| {
            caps.get(0)
                .is_some_and(|m| !Link::is_image_at(text, m.start()))
        })
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}
