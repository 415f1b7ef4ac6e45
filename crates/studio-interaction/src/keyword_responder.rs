//! Offline canned replies.
//!
//! Used when no chat backend is reachable by configuration. Rules are checked
//! in order and the first rule with a keyword contained in the lowercased
//! message wins.

use async_trait::async_trait;
use studio_core::Result;
use studio_core::chat::ChatEndpoint;

struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        keywords: &["price", "cost", "how much", "charge", "₦"],
        reply: "📸 Portrait sessions: ₦30,000 | Events/Weddings: from ₦120,000. Which package interests you? Click any package to pre-fill the contact form!",
    },
    Rule {
        keywords: &["book", "available", "availability", "date", "schedule"],
        reply: "✨ I'd love to help you book! Select a package below or use our contact form. We'll open your email with a pre-filled message!",
    },
    Rule {
        keywords: &["hello", "hi", "hey", "hola"],
        reply: "Hi there! I'm Studio's assistant 📸 I can help with pricing, booking, and answering questions. What brings you here today?",
    },
    Rule {
        keywords: &["portfolio", "gallery", "work", "photos"],
        reply: "We specialize in cinematic black & white photography. Would you like to see portraits, weddings, or editorial work?",
    },
    Rule {
        keywords: &["how long", "delivery", "turnaround", "ready"],
        reply: "Portraits: 3-5 days | Events: 1-2 weeks. We prioritize quality editing! ✨",
    },
    Rule {
        keywords: &["portrait", "portraits"],
        reply: "Our portrait session is ₦30,000 - includes 1 hour, 10 edited images. Click the package to pre-fill the contact form!",
    },
    Rule {
        keywords: &["wedding", "event", "marriage", "ceremony"],
        reply: "Wedding/event coverage starts at ₦120,000. Click the package to pre-fill the contact form with your inquiry! 📅",
    },
    Rule {
        keywords: &["package", "packages", "service", "services"],
        reply: "We offer: Portrait Session (₦30,000) & Event/Wedding (from ₦120,000). Click any package to get started! ✨",
    },
    Rule {
        keywords: &["contact", "email", "message", "reach"],
        reply: "Use our contact form below! It will open your email app with a pre-filled message. We respond within 24 hours! 📧",
    },
];

const DEFAULT_REPLY: &str = "Tell me about your photography needs - date, style, and I'll help create magic! 📸 Or click a package below to get started!";

/// Chat endpoint answering from a fixed keyword table, without I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordResponder;

impl KeywordResponder {
    pub fn new() -> Self {
        Self
    }

    /// Picks the canned reply for `message`.
    pub fn reply_for(&self, message: &str) -> &'static str {
        let lowered = message.to_lowercase();
        RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw)))
            .map(|rule| rule.reply)
            .unwrap_or(DEFAULT_REPLY)
    }
}

#[async_trait]
impl ChatEndpoint for KeywordResponder {
    async fn send(&self, message: &str) -> Result<String> {
        Ok(self.reply_for(message).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_keywords() {
        let responder = KeywordResponder::new();
        assert!(responder.reply_for("What's the PRICE?").starts_with("📸 Portrait sessions"));
        assert!(responder.reply_for("how much for a shoot").contains("₦120,000"));
    }

    #[test]
    fn test_rule_order_wins() {
        // "book" and "wedding" both match; booking is checked first.
        let reply = KeywordResponder::new().reply_for("book a wedding");
        assert!(reply.starts_with("✨ I'd love to help you book"));
    }

    #[test]
    fn test_unknown_message_gets_default() {
        assert_eq!(KeywordResponder::new().reply_for("zzz"), DEFAULT_REPLY);
    }

    #[tokio::test]
    async fn test_send_never_fails() {
        let reply = KeywordResponder::new().send("turnaround?").await.unwrap();
        assert!(reply.starts_with("Portraits: 3-5 days"));
    }
}
