//! Translation catalog
//!
//! Dictionaries for the languages the page ships with. Strings may contain
//! the literal `[Company Name]` placeholder; see [`crate::brand`].

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Language used when nothing better can be negotiated
pub const DEFAULT_LANGUAGE: &str = "en-US";

const EN_US: &[(&str, &str)] = &[
    // Navigation
    ("nav.privacy", "Privacy Policy"),
    ("nav.terms", "Terms"),
    ("nav.contact", "Contact"),
    ("nav.toggle", "Toggle navigation menu"),
    ("nav.language", "Select language"),
    // Main content
    ("title", "Preference Center"),
    (
        "intro.line1",
        "At [Company Name], your privacy and personal information is important to us.",
    ),
    (
        "intro.line2",
        "We believe privacy begins with clear choices and control. Our Preference Center allows you to manage your data and select the types of communications you’d like to receive from us.",
    ),
    // Form sections
    ("section.marketing", "Marketing Purpose"),
    ("topic.products", "Products & Innovations"),
    ("topic.events", "Events & Webinars"),
    ("topic.surveys", "Surveys & Focus Groups"),
    ("action.unsubscribe", "Unsubscribe"),
    // Email section
    ("email.title", "Communication preference"),
    (
        "email.notice",
        "You may unsubscribe from marketing emails on this page, however, we will still send transactional emails (account updates, transactions, regulatory notices) as required by law.",
    ),
    // Buttons
    ("button.submit", "Update Preferences"),
    ("button.submitting", "Updating..."),
    // Notifications
    ("notify.select", "Please select at least one preference option."),
    ("notify.success", "Your preferences have been updated successfully!"),
    ("notify.error", "Unable to load required resources. Please refresh the page."),
    ("notify.unsaved", "You have unsaved changes. Are you sure you want to leave?"),
    (
        "confirm.unsubscribe",
        "Are you sure you want to unsubscribe from all marketing emails?\n\nYou will still receive important transactional emails as required by law.",
    ),
    // Footer
    (
        "footer.legal",
        "[Company Name] is the data controller responsible for processing your personal data in accordance with Regulation (EU) 2016/679 (General Data Protection Regulation). Your consent to receive marketing communications is processed under Article 6(1)(a) GDPR. You have the right to withdraw your consent at any time by updating your preferences through this Privacy Center or by clicking the unsubscribe link in any email we send. You also have rights under Articles 15-22 GDPR, including the right to access, rectify, erase, restrict processing, data portability, and to object to processing of your personal data. For more information about how we process your data, please see our Privacy Policy. To exercise your rights or for data protection inquiries, please contact our Data Protection Officer by using the Contact link on this page.",
    ),
    ("footer.updated", "Last updated: Oct-12-2025. V7 - i18n Edition"),
    // Feedback prompt
    ("feedback.bar.text", "Help us make our emails more relevant to you."),
    ("feedback.bar.button", "Give Feedback"),
    ("feedback.bar.close", "Dismiss"),
    ("feedback.modal.title", "Share Your Feedback"),
    ("feedback.modal.description", "How we can improve the emails which we send to you?"),
    ("feedback.form.label", "Your feedback"),
    ("feedback.form.placeholder", "Tell us what you think..."),
    ("feedback.form.email.label", "Email (optional)"),
    ("feedback.form.email.placeholder", "your.email@example.com"),
    ("feedback.button.submit", "Send"),
    ("feedback.button.cancel", "Cancel"),
    ("feedback.notify.required", "Please enter your feedback before submitting."),
    ("feedback.notify.success", "Thank you for your feedback!."),
    ("feedback.notify.error", "Unable to submit feedback. Please try again later."),
];

const ZH: &[(&str, &str)] = &[
    // Navigation
    ("nav.privacy", "隐私政策"),
    ("nav.terms", "条款"),
    ("nav.contact", "联系我们"),
    ("nav.toggle", "切换导航菜单"),
    ("nav.language", "选择语言"),
    // Main content
    ("title", "偏好中心"),
    ("intro.line1", "在 [Company Name]，您的隐私和个人信息对我们很重要。"),
    (
        "intro.line2",
        "隐私从为您提供对数据的控制权开始，以及您做出有信心的明智选择所需的工具和信息。通过我们的隐私中心，我们邀请您自定义接收的电子邮件。",
    ),
    // Form sections
    ("section.marketing", "营销目的"),
    ("topic.products", "产品与创新"),
    ("topic.events", "活动与网络研讨会"),
    ("topic.surveys", "调查与焦点小组"),
    ("action.unsubscribe", "取消订阅"),
    // Email section
    ("email.title", "通信偏好"),
    (
        "email.notice",
        "您可以在此页面取消订阅营销电子邮件，但是，我们仍将根据法律要求发送交易电子邮件（账户更新、交易、监管通知）。",
    ),
    // Buttons
    ("button.submit", "更新偏好"),
    ("button.submitting", "正在更新..."),
    // Notifications
    ("notify.select", "请至少选择一个偏好选项。"),
    ("notify.success", "您的偏好已成功更新！"),
    ("notify.error", "无法加载所需资源。请刷新页面。"),
    ("notify.unsaved", "您有未保存的更改。您确定要离开吗？"),
    ("confirm.unsubscribe", "您确定要取消订阅所有营销通信吗？\n\n您仍将收到重要的交易电子邮件。"),
    // Footer
    (
        "footer.legal",
        "[Company Name] 是根据《欧盟通用数据保护条例》(EU) 2016/679 负责处理您个人数据的数据控制者。您接收营销通信的同意根据 GDPR 第 6(1)(a) 条处理。您有权随时通过此隐私中心更新您的偏好或点击我们发送的任何电子邮件中的取消订阅链接来撤回您的同意。您还享有 GDPR 第 15-22 条规定的权利，包括访问、更正、删除、限制处理、数据可移植性以及反对处理您的个人数据的权利。有关我们如何处理您的数据的更多信息，请参阅我们的隐私政策。要行使您的权利或咨询数据保护问题，请使用此页面上的联系链接联系我们的数据保护官。",
    ),
    ("footer.updated", "最后更新：2025年10月12日。V7"),
    // Feedback prompt
    ("feedback.bar.text", "帮助我们改进体验"),
    ("feedback.bar.button", "提供反馈"),
    ("feedback.bar.close", "关闭"),
    ("feedback.modal.title", "分享您的反馈"),
    ("feedback.modal.description", "我们重视您的意见！请告诉我们如何改进您的偏好中心体验。"),
    ("feedback.form.label", "您的反馈"),
    ("feedback.form.placeholder", "告诉我们您的想法..."),
    ("feedback.form.email.label", "电子邮件（可选）"),
    ("feedback.form.email.placeholder", "your.email@example.com"),
    ("feedback.button.submit", "提交反馈"),
    ("feedback.button.cancel", "取消"),
    ("feedback.notify.required", "请在提交前输入您的反馈。"),
    ("feedback.notify.success", "感谢您的反馈！我们很感激您的意见。"),
    ("feedback.notify.error", "无法提交反馈。请稍后再试。"),
];

const DE: &[(&str, &str)] = &[
    // Navigation
    ("nav.privacy", "Datenschutzrichtlinie"),
    ("nav.terms", "Bedingungen"),
    ("nav.contact", "Kontakt"),
    ("nav.toggle", "Navigationsmenü umschalten"),
    ("nav.language", "Sprache auswählen"),
    // Main content
    ("title", "Präferenzzentrum"),
    (
        "intro.line1",
        "Bei [Company Name] sind Ihre Privatsphäre und persönlichen Informationen wichtig für uns.",
    ),
    (
        "intro.line2",
        "Datenschutz beginnt damit, Ihnen Kontrolle über Ihre Daten zu geben, zusammen mit den Tools und Informationen, die Sie benötigen, um fundierte Entscheidungen zu treffen, mit denen Sie sich sicher fühlen können. In unserem Datenschutzzentrum laden wir Sie ein, die E-Mails anzupassen, die Sie erhalten.",
    ),
    // Form sections
    ("section.marketing", "Marketing-Zweck"),
    ("topic.products", "Produkte & Innovationen"),
    ("topic.events", "Veranstaltungen & Webinare"),
    ("topic.surveys", "Umfragen & Fokusgruppen"),
    ("action.unsubscribe", "Abmelden"),
    // Email section
    ("email.title", "Kommunikationspräferenz"),
    (
        "email.notice",
        "Sie können sich auf dieser Seite von Marketing-E-Mails abmelden. Wir werden jedoch weiterhin Transaktions-E-Mails (Kontoaktualisierungen, Transaktionen, behördliche Mitteilungen) senden, wie gesetzlich vorgeschrieben.",
    ),
    // Buttons
    ("button.submit", "Präferenzen Aktualisieren"),
    ("button.submitting", "Wird aktualisiert..."),
    // Notifications
    ("notify.select", "Bitte wählen Sie mindestens eine Präferenzoption aus."),
    ("notify.success", "Ihre Präferenzen wurden erfolgreich aktualisiert!"),
    (
        "notify.error",
        "Erforderliche Ressourcen konnten nicht geladen werden. Bitte aktualisieren Sie die Seite.",
    ),
    (
        "notify.unsaved",
        "Sie haben nicht gespeicherte Änderungen. Sind Sie sicher, dass Sie gehen möchten?",
    ),
    (
        "confirm.unsubscribe",
        "Sind Sie sicher, dass Sie sich von allen Marketing-Kommunikationen abmelden möchten?\n\nSie erhalten weiterhin wichtige Transaktions-E-Mails.",
    ),
    // Footer
    (
        "footer.legal",
        "[Company Name] ist der Datenverantwortliche für die Verarbeitung Ihrer personenbezogenen Daten gemäß der Verordnung (EU) 2016/679 (Datenschutz-Grundverordnung). Ihre Einwilligung zum Erhalt von Marketing-Kommunikation wird gemäß Art. 6 Abs. 1 lit. a DSGVO verarbeitet. Sie haben das Recht, Ihre Einwilligung jederzeit zu widerrufen, indem Sie Ihre Präferenzen über dieses Datenschutzzentrum aktualisieren oder auf den Abmeldelink in jeder von uns gesendeten E-Mail klicken. Sie haben auch Rechte gemäß Art. 15-22 DSGVO, einschließlich des Rechts auf Zugang, Berichtigung, Löschung, Einschränkung der Verarbeitung, Datenübertragbarkeit und Widerspruch gegen die Verarbeitung Ihrer personenbezogenen Daten. Weitere Informationen darüber, wie wir Ihre Daten verarbeiten, finden Sie in unserer Datenschutzrichtlinie. Um Ihre Rechte auszuüben oder Fragen zum Datenschutz zu stellen, wenden Sie sich bitte über den Kontaktlink auf dieser Seite an unseren Datenschutzbeauftragten.",
    ),
    ("footer.updated", "Zuletzt aktualisiert: 12-Okt-2025. V7"),
    // Feedback prompt
    ("feedback.bar.text", "Helfen Sie uns, diese Erfahrung zu verbessern"),
    ("feedback.bar.button", "Feedback Geben"),
    ("feedback.bar.close", "Schließen"),
    ("feedback.modal.title", "Teilen Sie Ihr Feedback"),
    (
        "feedback.modal.description",
        "Wir schätzen Ihre Meinung! Lassen Sie uns wissen, wie wir Ihre Präferenzzentrums-Erfahrung verbessern können.",
    ),
    ("feedback.form.label", "Ihr Feedback"),
    ("feedback.form.placeholder", "Sagen Sie uns, was Sie denken..."),
    ("feedback.form.email.label", "E-Mail (optional)"),
    ("feedback.form.email.placeholder", "ihre.email@beispiel.de"),
    ("feedback.button.submit", "Feedback Absenden"),
    ("feedback.button.cancel", "Abbrechen"),
    ("feedback.notify.required", "Bitte geben Sie Ihr Feedback ein, bevor Sie es absenden."),
    ("feedback.notify.success", "Vielen Dank für Ihr Feedback! Wir schätzen Ihre Meinung."),
    (
        "feedback.notify.error",
        "Feedback konnte nicht gesendet werden. Bitte versuchen Sie es später erneut.",
    ),
];

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let languages = [("en-US", EN_US), ("zh", ZH), ("de", DE)];
    Catalog {
        order: languages.iter().map(|(lang, _)| *lang).collect(),
        tables: languages
            .into_iter()
            .map(|(lang, entries)| (lang, entries.iter().copied().collect()))
            .collect(),
    }
});

/// Dictionary set for all supported languages
#[derive(Debug)]
pub struct Catalog {
    /// Tags in declaration order; negotiation ties resolve to the first
    order: Vec<&'static str>,
    tables: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl Catalog {
    /// The dictionaries compiled into the library
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Check whether a language tag has a dictionary
    pub fn supports(&self, lang: &str) -> bool {
        self.tables.contains_key(lang)
    }

    /// Supported language tags, in declaration order
    pub fn languages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    /// Look up a key in one language's dictionary
    pub fn get(&self, lang: &str, key: &str) -> Option<&'static str> {
        self.tables.get(lang).and_then(|table| table.get(key)).copied()
    }

    /// Pick the best supported language for a requested tag.
    ///
    /// Exact match wins, then a dictionary keyed by the tag's two-letter
    /// short code, then any dictionary whose tag starts with the short
    /// code, then the default. Empty and whitespace-only tags resolve
    /// straight to the default.
    pub fn negotiate(&self, requested: &str) -> &'static str {
        let requested = requested.trim();
        if requested.is_empty() {
            return DEFAULT_LANGUAGE;
        }

        if let Some(exact) = self.languages().find(|lang| *lang == requested) {
            return exact;
        }

        let short = requested.chars().take(2).collect::<String>().to_lowercase();
        if let Some(by_short) = self.languages().find(|lang| *lang == short) {
            return by_short;
        }

        if let Some(by_prefix) = self
            .languages()
            .find(|lang| lang.to_lowercase().starts_with(&short))
        {
            return by_prefix;
        }

        DEFAULT_LANGUAGE
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_builtin_languages() {
        let catalog = Catalog::builtin();
        let langs: Vec<_> = catalog.languages().collect();
        assert_eq!(langs, vec!["en-US", "zh", "de"]);
    }

    #[test]
    fn test_every_default_key_exists_in_every_language() {
        let catalog = Catalog::builtin();
        for (key, _) in EN_US {
            for lang in ["zh", "de"] {
                assert!(
                    catalog.get(lang, key).is_some(),
                    "key {key:?} missing from {lang:?}"
                );
            }
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("en-US", "title"), Some("Preference Center"));
        assert_eq!(catalog.get("de", "title"), Some("Präferenzzentrum"));
        assert_eq!(catalog.get("en-US", "no.such.key"), None);
        assert_eq!(catalog.get("fr", "title"), None);
    }

    #[rstest]
    #[case("en-US", "en-US")] // exact
    #[case("zh", "zh")] // exact short tag
    #[case("de-AT", "de")] // short code
    #[case("en", "en-US")] // prefix of a regional tag
    #[case("EN-GB", "en-US")] // case-insensitive prefix
    #[case("fr-FR", "en-US")] // unknown falls back
    #[case("", "en-US")] // empty tag
    #[case("   ", "en-US")] // whitespace tag
    fn test_negotiation(#[case] requested: &str, #[case] resolved: &str) {
        assert_eq!(Catalog::builtin().negotiate(requested), resolved);
    }
}
