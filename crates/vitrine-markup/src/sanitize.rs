//! Helpers for putting catalog data into markup safely.

/// Validates URLs and allows only safe protocols.
///
/// Allows relative paths (`/path`, `./path`, `?query`), anchor links
/// (`#section`) and `http://` / `https://`. Everything else, including
/// `javascript:`, `data:` and protocol-relative `//host` URLs, is rejected.
///
/// # Examples
///
/// ```
/// use vitrine_markup::is_safe_url;
///
/// assert!(is_safe_url("https://partner.example/item/9"));
/// assert!(is_safe_url("/product/mug/"));
/// assert!(!is_safe_url("javascript:alert(1)"));
/// assert!(!is_safe_url(" JavaScript:alert(1)"));
/// ```
pub fn is_safe_url(url: &str) -> bool {
	let url = url.trim();
	let url_lower = url.to_lowercase();

	if url.starts_with("//") {
		return false;
	}
	if url.starts_with('/') || url.starts_with("./") || url.starts_with('#') || url.starts_with('?')
	{
		return true;
	}

	["http://", "https://"]
		.iter()
		.any(|protocol| url_lower.starts_with(protocol))
}

/// Returns `url` when it passes [`is_safe_url`], otherwise `"#"`.
pub fn safe_href(url: &str) -> String {
	if is_safe_url(url) {
		url.trim().to_string()
	} else {
		"#".to_string()
	}
}

/// Strips HTML tags, respecting quoted attribute values and comments.
///
/// # Examples
///
/// ```
/// use vitrine_markup::strip_tags;
///
/// assert_eq!(strip_tags("<p>Hand <b>made</b></p>"), "Hand made");
/// assert_eq!(strip_tags(r#"<a title="x>y">Link</a>"#), "Link");
/// assert_eq!(strip_tags("Tea<!-- note -->pot"), "Teapot");
/// assert_eq!(strip_tags("Cup<br"), "Cup");
/// ```
pub fn strip_tags(html: &str) -> String {
	let mut result = String::with_capacity(html.len());
	let chars: Vec<char> = html.chars().collect();
	let len = chars.len();
	let mut i = 0;

	while i < len {
		if chars[i] == '<' {
			if i + 3 < len && chars[i + 1] == '!' && chars[i + 2] == '-' && chars[i + 3] == '-' {
				i += 4;
				let mut found_close = false;
				while i + 2 < len {
					if chars[i] == '-' && chars[i + 1] == '-' && chars[i + 2] == '>' {
						i += 3;
						found_close = true;
						break;
					}
					i += 1;
				}
				if !found_close {
					break;
				}
				continue;
			}

			i += 1;
			let mut in_single_quote = false;
			let mut in_double_quote = false;

			while i < len {
				match chars[i] {
					'"' if !in_single_quote => in_double_quote = !in_double_quote,
					'\'' if !in_double_quote => in_single_quote = !in_single_quote,
					'>' if !in_single_quote && !in_double_quote => {
						i += 1;
						break;
					}
					_ => {}
				}
				i += 1;
			}
		} else {
			result.push(chars[i]);
			i += 1;
		}
	}
	result
}

/// Keeps the first `max_words` whitespace-separated words of `text`,
/// appending `…` when anything was cut.
///
/// # Examples
///
/// ```
/// use vitrine_markup::trim_words;
///
/// assert_eq!(trim_words("one two three", 2), "one two…");
/// assert_eq!(trim_words("  one   two ", 5), "one two");
/// ```
pub fn trim_words(text: &str, max_words: usize) -> String {
	let words: Vec<&str> = text.split_whitespace().collect();
	if words.len() <= max_words {
		words.join(" ")
	} else {
		format!("{}…", words[..max_words].join(" "))
	}
}

/// Reduces `input` to a token usable inside a CSS class name.
///
/// ASCII letters, digits, `-` and `_` are kept (letters lowercased); every
/// other character becomes `-`. An empty result becomes `"x"`.
///
/// # Examples
///
/// ```
/// use vitrine_markup::class_token;
///
/// assert_eq!(class_token("Summer Sale"), "summer-sale");
/// assert_eq!(class_token("a.b{}"), "a-b--");
/// assert_eq!(class_token(""), "x");
/// ```
pub fn class_token(input: &str) -> String {
	let token: String = input
		.chars()
		.map(|ch| match ch {
			'a'..='z' | '0'..='9' | '-' | '_' => ch,
			'A'..='Z' => ch.to_ascii_lowercase(),
			_ => '-',
		})
		.collect();
	if token.is_empty() {
		"x".to_string()
	} else {
		token
	}
}
