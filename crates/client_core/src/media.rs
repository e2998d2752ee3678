use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::ClientError;

const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];

/// Encode raw image bytes as the `data:` URL the backend stores for image
/// messages and avatars. Only the image types the backend serves back out
/// are allowed in.
pub fn image_data_url(mime: &str, bytes: &[u8]) -> Result<String, ClientError> {
    if !ALLOWED_IMAGE_TYPES.contains(&mime) {
        return Err(ClientError::UnsupportedImageType {
            mime: mime.to_string(),
        });
    }
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_png_bytes_as_data_url() {
        let url = image_data_url("image/png", b"fakepng").expect("encode");
        assert_eq!(url, "data:image/png;base64,ZmFrZXBuZw==");
    }

    #[test]
    fn accepts_every_listed_image_type() {
        for mime in ["image/jpeg", "image/png", "image/jpg"] {
            assert!(image_data_url(mime, b"x").is_ok(), "rejected {mime}");
        }
    }

    #[test]
    fn rejects_other_mime_types() {
        let err = image_data_url("image/gif", b"gif").expect_err("gif should be rejected");
        assert!(matches!(
            err,
            ClientError::UnsupportedImageType { mime } if mime == "image/gif"
        ));
    }
}
