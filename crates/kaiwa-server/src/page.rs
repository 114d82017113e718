//! Landing page rendering.

use kaiwa_config::schema::{PageConfig, ProviderConfig};
use tera::{Context, Tera};

const TEMPLATE_NAME: &str = "chat.html";
const TEMPLATE_SOURCE: &str = include_str!("../templates/chat.html");

/// The chat page. Its context is fixed at startup.
pub struct LandingPage {
    tera: Tera,
    context: Context,
}

impl LandingPage {
    pub fn new(provider: &ProviderConfig, page: &PageConfig) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE_SOURCE)?;

        let mut context = Context::new();
        context.insert("chat_model", &provider.model);
        context.insert("chat_provider", &provider.name);
        context.insert("localization_info_please_type", &page.please_type);
        context.insert("localization_info_start", &page.start);

        Ok(Self { tera, context })
    }

    pub fn render(&self) -> Result<String, tera::Error> {
        self.tera.render(TEMPLATE_NAME, &self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_model_and_localized_text() {
        let page = LandingPage::new(&ProviderConfig::default(), &PageConfig::default()).unwrap();
        let html = page.render().unwrap();
        // Autoescaping also encodes `/`.
        assert!(html.contains("qwen&#x2F;qwen3-32b"));
        assert!(html.contains("groq"));
        assert!(html.contains("メッセージを入力してください。。。"));
        assert!(html.contains("会話を始めましょう"));
    }

    #[test]
    fn context_values_are_escaped() {
        let provider = ProviderConfig {
            model: "<script>alert(1)</script>".into(),
            ..ProviderConfig::default()
        };
        let page = LandingPage::new(&provider, &PageConfig::default()).unwrap();
        let html = page.render().unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
