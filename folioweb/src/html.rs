//! HTML content helpers for the folioweb UI.
//!
//! Exports the static admin upload page (`ADMIN_PAGE`) and the named-slot
//! image substitution applied to the portfolio template. Keep HTML blobs
//! here to avoid runtime template dependencies.
//!
use foliostore::store::ImageMap;

/// HTML page for the admin upload form posting to the upload endpoint
pub const ADMIN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Upload Image</title>
    <style>
        body { background: #121212; color: #e0e0e0; font-family: 'Segoe UI', sans-serif; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; }
        .upload-card { background: #1e1e1e; padding: 2rem; border-radius: 12px; box-shadow: 0 10px 30px rgba(0,0,0,0.5); width: 100%; max-width: 420px; }
        h2 { text-align: center; margin-bottom: 1.5rem; }
        label { display: block; margin: 10px 0 4px; font-size: 0.9rem; color: #aaa; }
        select, input[type=file] { width: 100%; padding: 10px; border-radius: 6px; border: 1px solid #333; background: #252525; color: white; box-sizing: border-box; }
        button { width: 100%; padding: 12px; background: #007bff; border: none; color: white; border-radius: 6px; cursor: pointer; font-weight: bold; margin-top: 16px; }
        button:hover { background: #0056b3; }
        .note { color: #888; font-size: 0.8rem; margin-top: 16px; }
        a { color: #007bff; }
    </style>
</head>
<body>
    <div class="upload-card">
        <h2>Upload portfolio image</h2>
        <form action="/upload" method="post" enctype="multipart/form-data">
            <label for="target">Target</label>
            <select id="target" name="target">
                <option value="hero" selected>Hero image (portrait)</option>
            </select>
            <label for="image">Image file</label>
            <input id="image" type="file" name="image" accept="image/*" required>
            <button type="submit">Upload</button>
        </form>
        <p class="note">After upload, the site will reference the new image path automatically.</p>
        <p><a href="/">Back to site</a></p>
    </div>
</body>
</html>"#;

/// Apply every slot mapping to the template.
///
/// Each entry rewrites the `src` of the element marked with the matching
/// `data-slot` attribute; slots with no marker in the template are ignored,
/// so an empty map returns the template unchanged.
pub fn apply_image_map(template: &str, map: &ImageMap) -> String {
    let mut html = template.to_string();
    for (slot, path) in map {
        html = replace_slot_src(&html, slot, path);
    }
    html
}

/// Rewrite the `src` attribute of the first element carrying
/// `data-slot="<slot>"`, leaving all other markup untouched.
///
/// The substitution is textual and expects the marked element to carry a
/// double-quoted `src`; anything else leaves the document as-is.
fn replace_slot_src(html: &str, slot: &str, path: &str) -> String {
    let marker = format!("data-slot=\"{slot}\"");
    let Some(marker_at) = html.find(&marker) else {
        return html.to_string();
    };
    let Some(tag_start) = html[..marker_at].rfind('<') else {
        return html.to_string();
    };
    let Some(tag_len) = html[tag_start..].find('>') else {
        return html.to_string();
    };
    let tag = &html[tag_start..tag_start + tag_len];
    let Some(src_at) = tag.find("src=\"") else {
        return html.to_string();
    };

    let value_start = tag_start + src_at + "src=\"".len();
    let Some(value_len) = html[value_start..].find('"') else {
        return html.to_string();
    };

    let mut out = String::with_capacity(html.len() + path.len());
    out.push_str(&html[..value_start]);
    out.push_str(path);
    out.push_str(&html[value_start + value_len..]);
    out
}
