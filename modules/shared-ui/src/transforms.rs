use atrium_core::ValueTransform;

/// Maps a language key to its display name.
///
/// Unknown keys pass through unchanged, so a missing entry degrades to the
/// raw key instead of failing the render.
pub struct LanguageNameTransform;

impl ValueTransform for LanguageNameTransform {
    fn id(&self) -> &'static str {
        "language-name"
    }

    fn transform(&self, input: &str) -> String {
        match input {
            "en" => "English",
            "fr" => "Français",
            "de" => "Deutsch",
            "es" => "Español",
            "it" => "Italiano",
            "nl" => "Nederlands",
            "pt-br" => "Português (Brasil)",
            "ru" => "Русский",
            "zh-cn" => "中文（简体）",
            "ja" => "日本語",
            other => other,
        }
        .to_string()
    }
}
