//! PNG export of the on-screen card.
//!
//! The webview does the rasterizing: a capture script clones the card
//! element, inlines computed styles, drops every node marked
//! `data-card-export-ignore` (resize handles, color popover), draws the
//! result onto a canvas at the device pixel ratio, and hands back a PNG
//! data URL. Any failure along the way (missing node, tainted canvas)
//! surfaces as a single export error with no partial output.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use dioxus::document;
use rfd::FileDialog;
use storyshot_core::StoryError;

/// Attribute marking editing-only nodes that must not appear in exports.
pub const EXPORT_IGNORE_ATTR: &str = "data-card-export-ignore";

/// Element id of the card preview root.
pub const CARD_ELEMENT_ID: &str = "story-card";

const CAPTURE_JS: &str = r#"
try {
    const node = document.getElementById("story-card");
    if (!node) return null;
    const ratio = window.devicePixelRatio || 1;
    const rect = node.getBoundingClientRect();

    const clone = node.cloneNode(true);
    const inline = (src, dst) => {
        const cs = window.getComputedStyle(src);
        let css = "";
        for (let i = 0; i < cs.length; i++) {
            const p = cs[i];
            css += p + ":" + cs.getPropertyValue(p) + ";";
        }
        dst.setAttribute("style", css);
        for (let i = 0; i < src.children.length; i++) {
            inline(src.children[i], dst.children[i]);
        }
    };
    inline(node, clone);
    clone.querySelectorAll("[data-card-export-ignore]").forEach((el) => el.remove());
    clone.setAttribute("xmlns", "http://www.w3.org/1999/xhtml");

    const xml = new XMLSerializer().serializeToString(clone);
    const svg = '<svg xmlns="http://www.w3.org/2000/svg" width="' + rect.width +
        '" height="' + rect.height + '"><foreignObject width="100%" height="100%">' +
        xml + '</foreignObject></svg>';

    const img = new Image();
    await new Promise((resolve, reject) => {
        img.onload = resolve;
        img.onerror = reject;
        img.src = "data:image/svg+xml;charset=utf-8," + encodeURIComponent(svg);
    });

    const canvas = document.createElement("canvas");
    canvas.width = Math.round(rect.width * ratio);
    canvas.height = Math.round(rect.height * ratio);
    const ctx = canvas.getContext("2d");
    ctx.scale(ratio, ratio);
    ctx.drawImage(img, 0, 0, rect.width, rect.height);
    return canvas.toDataURL("image/png");
} catch (e) {
    return null;
}
"#;

/// Capture the current card preview as PNG bytes.
pub async fn capture_card_png() -> Result<Vec<u8>, StoryError> {
    let value = document::eval(CAPTURE_JS)
        .await
        .map_err(|e| StoryError::Export(format!("capture script failed: {e:?}")))?;
    let data_url = value
        .as_str()
        .ok_or_else(|| StoryError::Export("rasterizer produced no image".to_string()))?
        .to_string();
    png_bytes_from_data_url(&data_url)
}

/// Decode a `data:image/png;base64,...` URL into raw PNG bytes.
pub fn png_bytes_from_data_url(data_url: &str) -> Result<Vec<u8>, StoryError> {
    let encoded = data_url
        .strip_prefix("data:image/png;base64,")
        .ok_or_else(|| StoryError::Export("not a PNG data URL".to_string()))?;
    BASE64
        .decode(encoded)
        .map_err(|e| StoryError::Export(format!("invalid image data: {e}")))
}

/// Ask for a save location and write the PNG there.
///
/// Returns `false` when the user cancelled the dialog.
pub async fn save_png_dialog(bytes: Vec<u8>) -> Result<bool, StoryError> {
    // The dialog blocks, so it runs off the UI task.
    let picked = tokio::task::spawn_blocking(|| {
        FileDialog::new()
            .set_title("Save card")
            .set_file_name("story-card.png")
            .add_filter("PNG image", &["png"])
            .save_file()
    })
    .await
    .map_err(|e| StoryError::Export(format!("save dialog failed: {e}")))?;

    match picked {
        Some(path) => {
            tokio::fs::write(&path, &bytes)
                .await
                .map_err(|e| StoryError::Export(format!("write failed: {e}")))?;
            tracing::info!(path = %path.display(), "card exported");
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_png_data_url() {
        // Smallest base64 payload; content does not matter here.
        let bytes = png_bytes_from_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_rejects_non_png_data_url() {
        assert!(png_bytes_from_data_url("data:image/jpeg;base64,AAAA").is_err());
        assert!(png_bytes_from_data_url("nonsense").is_err());
    }

    #[test]
    fn test_rejects_bad_base64() {
        assert!(png_bytes_from_data_url("data:image/png;base64,!!!").is_err());
    }

    #[test]
    fn test_capture_script_filters_ignore_attr() {
        assert!(CAPTURE_JS.contains(EXPORT_IGNORE_ATTR));
        assert!(CAPTURE_JS.contains(CARD_ELEMENT_ID));
    }
}
