//! Normalization of share links into URLs that can be fetched directly.

const DRIVE_FILE_MARKER: &str = "drive.google.com/file/d/";

/// Rewrite a Google Drive file share link into its thumbnail form.
///
/// Any other URL, including links already in a direct form, is returned unchanged.
pub fn to_direct_image_url(url: &str) -> String {
    if let Some(start) = url.find(DRIVE_FILE_MARKER) {
        let rest = &url[start + DRIVE_FILE_MARKER.len()..];
        let file_id: String = rest
            .chars()
            .take_while(|ch| ch.is_ascii_alphanumeric() || *ch == '_' || *ch == '-')
            .collect();

        if !file_id.is_empty() {
            return format!("https://drive.google.com/thumbnail?id={file_id}&sz=w1000");
        }
    }

    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_drive_share_links() {
        assert_eq!(
            to_direct_image_url("https://drive.google.com/file/d/1AbC_d-9/view?usp=sharing"),
            "https://drive.google.com/thumbnail?id=1AbC_d-9&sz=w1000"
        );
    }

    #[test]
    fn keeps_direct_links() {
        let thumbnail = "https://drive.google.com/thumbnail?id=xyz&sz=w1000";
        assert_eq!(to_direct_image_url(thumbnail), thumbnail);

        let hosted = "https://lh3.googleusercontent.com/d/xyz";
        assert_eq!(to_direct_image_url(hosted), hosted);

        let other = "https://images.unsplash.com/photo-1?w=800";
        assert_eq!(to_direct_image_url(other), other);
    }

    #[test]
    fn share_link_without_id_is_untouched() {
        let url = "https://drive.google.com/file/d/";
        assert_eq!(to_direct_image_url(url), url);
    }
}
