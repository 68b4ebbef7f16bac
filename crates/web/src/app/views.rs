//! Server-rendered HTML pages.
//!
//! The pages are small enough that plain string rendering covers them; all
//! user-supplied text passes through `escape` before interpolation.

use axum::response::Html;

use buildup_members::Member;

pub fn home_page() -> Html<String> {
    page(
        "Home",
        r#"<h1>BuildUp</h1>
<p>Build your team up, one member at a time.</p>
<p><a href="/signup">Sign up</a></p>"#,
    )
}

pub fn signup_form(error: Option<&str>, email: &str, name: &str) -> Html<String> {
    let error_html = match error {
        Some(msg) => format!(r#"<p class="error">{}</p>"#, escape(msg)),
        None => String::new(),
    };

    let body = format!(
        r#"<h1>Sign up</h1>
{error_html}
<form method="post" action="/signup">
  <label>Email <input type="email" name="email" value="{email}"></label>
  <label>Password <input type="password" name="password"></label>
  <label>Name <input type="text" name="name" value="{name}"></label>
  <button type="submit">Create account</button>
</form>"#,
        email = escape(email),
        name = escape(name),
    );

    page("Sign up", &body)
}

pub fn signup_success(member: &Member) -> Html<String> {
    let name = member.name.as_deref().unwrap_or("new member");
    let body = format!(
        r#"<h1>Welcome, {name}!</h1>
<p>Your account <strong>{email}</strong> was created.</p>
<p><a href="/">Back to home</a></p>"#,
        name = escape(name),
        email = escape(&member.email),
    );

    page("Welcome", &body)
}

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} · BuildUp</title>
</head>
<body>
{body}
</body>
</html>
"#
    ))
}

/// Minimal HTML escaping for text interpolated into pages.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<b a="x">&'"#),
            "&lt;b a=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn form_echoes_submitted_values_escaped() {
        let Html(page) = signup_form(Some("Email already registered"), "a@x.com", "<Bob>");

        assert!(page.contains("Email already registered"));
        assert!(page.contains(r#"value="a@x.com""#));
        assert!(page.contains("&lt;Bob&gt;"));
        assert!(!page.contains("<Bob>"));
    }
}
