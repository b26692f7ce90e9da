/// Escape HTML special characters to prevent XSS.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Make serialized JSON safe to inline inside a `<script>` element.
pub fn escape_script_json(json: &str) -> String {
    // Prevent script tag breakout
    json.replace("</", "<\\/")
}
