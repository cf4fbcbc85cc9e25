//! Login Page View
//!
//! Server-rendered login page. Small enough that a handcrafted view
//! function beats pulling in a template engine.

use axum::response::Html;

/// Render the login page, with the flash error when present
pub fn login_page(flash: Option<&str>) -> Html<String> {
    let error_block = match flash {
        Some(message) => format!(
            r#"<p class="error">{}</p>"#,
            escape_html(message)
        ),
        None => String::new(),
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Log in</title>
  <style>
    body {{ font-family: sans-serif; max-width: 24rem; margin: 4rem auto; }}
    label {{ display: block; margin-top: 1rem; }}
    input {{ width: 100%; padding: 0.4rem; }}
    button {{ margin-top: 1.5rem; padding: 0.5rem 1.5rem; }}
    .error {{ color: #b00020; }}
  </style>
</head>
<body>
  <h1>Log in</h1>
  {error_block}
  <form method="post" action="/login">
    <label for="username">Username</label>
    <input id="username" name="username" type="text" autocomplete="username" required>
    <label for="password">Password</label>
    <input id="password" name="password" type="password" autocomplete="current-password" required>
    <button type="submit">Log in</button>
  </form>
</body>
</html>
"#
    ))
}

fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            c => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_rendered_when_present() {
        let page = login_page(Some("Invalid username or password")).0;
        assert!(page.contains("Invalid username or password"));

        let page = login_page(None).0;
        assert!(!page.contains("class=\"error\""));
    }

    #[test]
    fn test_flash_is_escaped() {
        let page = login_page(Some("<script>alert(1)</script>")).0;
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
