use maud::{html, Markup};
use rust_i18n::t;

use crate::{names, views::components};

const FEATURES: [(&str, &str); 7] = [
    (
        "Facial Emotion Recognition",
        "AI detects emotions by analyzing your facial expressions in real-time, helping you understand your emotions without manual input.",
    ),
    (
        "Mood Tracking & History",
        "Visual dashboard to track mood patterns over time, allowing you to monitor emotional trends and identify triggers.",
    ),
    (
        "Sleep Analysis & Improvement",
        "Track your sleep patterns and receive personalized recommendations to improve sleep quality and enhance mental wellbeing.",
    ),
    (
        "Personalized Mental Health Tests",
        "Short, research-backed quizzes assess anxiety, depression, and stress levels, providing personalized insights.",
    ),
    (
        "Therapeutic Recommendations",
        "Personalized exercises like mindfulness and breathing techniques based on your mood data to improve wellbeing.",
    ),
    (
        "Daily Mood Journal",
        "Log daily feelings and track emotional patterns to promote self-awareness and emotional growth.",
    ),
    (
        "AI Chatbot Support",
        "Get instant emotional support, self-care tips, and motivational content whenever you need it.",
    ),
];

const PRIVACY: [(&str, &str); 4] = [
    (
        "On-Device Processing",
        "Most data processing happens directly on your device. Facial expressions, voice data, and journal entries are analyzed locally without sending raw data to our servers.",
    ),
    (
        "End-to-End Encryption",
        "All communication with our servers uses end-to-end encryption. Your data is encrypted before it leaves your device and can only be decrypted by you.",
    ),
    (
        "No Data Selling",
        "We never sell your data to third parties. MoodMind is funded by subscriptions, not by monetizing your personal information.",
    ),
    (
        "Granular Privacy Controls",
        "You have complete control over what data is collected and how it's used. Adjust privacy settings anytime to match your comfort level.",
    ),
];

const FAQ: [(&str, &str); 4] = [
    (
        "Is MoodMind a replacement for professional therapy?",
        "No, MoodMind is not a replacement for professional mental health services. It is designed to complement professional care, not replace it. If you're experiencing serious mental health concerns, please consult a licensed healthcare provider.",
    ),
    (
        "How accurate is the facial emotion recognition technology?",
        "It detects the seven basic emotions with an accuracy rate of approximately 85-90%. Accuracy may vary with lighting conditions, camera quality, and individual differences in expressing emotions.",
    ),
    (
        "What happens to my data if I cancel my subscription?",
        "You keep access to your data for 30 days, during which you can export it. After this period, all your personal data is permanently deleted from our servers.",
    ),
    (
        "Does the app work offline?",
        "Yes, journaling, mood tracking and downloaded resources work offline and sync when you're back online. The AI chatbot and some personalized recommendations require an internet connection.",
    ),
];

pub fn landing_page() -> Markup {
    html! {
        // Hero section
        section.landing-hero {
            h1 { (t!("landing.tagline")) }
            p.landing-hero-desc { (t!("landing.description")) }
            div.landing-cta {
                a role="button" href=(names::QUIZ_URL) {
                    (t!("landing.take_quiz"))
                }
                a role="button" href={ "#" (names::FEATURES_ANCHOR) } class="outline" {
                    (t!("landing.learn_more"))
                }
            }
        }

        section.landing-features id=(names::FEATURES_ANCHOR) {
            h2 { (t!("landing.features_title")) }
            div.landing-grid {
                @for (title, desc) in FEATURES {
                    (components::card(title, desc))
                }
            }
        }

        section.landing-how {
            h2 { (t!("landing.how_title")) }
            div.landing-grid {
                (components::card(&t!("landing.how_setup_title"), &t!("landing.how_setup_desc")))
                (components::card(&t!("landing.how_checkin_title"), &t!("landing.how_checkin_desc")))
                (components::card(&t!("landing.how_support_title"), &t!("landing.how_support_desc")))
            }
        }

        section.landing-privacy {
            h2 { (t!("landing.privacy_title")) }
            div.landing-grid {
                @for (title, desc) in PRIVACY {
                    (components::card(title, desc))
                }
            }
        }

        section.landing-faq {
            h2 { (t!("landing.faq_title")) }
            @for (question, answer) in FAQ {
                details {
                    summary { (question) }
                    p { (answer) }
                }
            }
        }

        section.landing-newsletter {
            (newsletter_form(None))
        }

        section.landing-contact id=(names::CONTACT_ANCHOR) {
            h2 { (t!("contact.title")) }
            p {
                a href={ "mailto:" (t!("contact.support_email")) } { (t!("contact.support_email")) }
                br;
                small { (t!("contact.hours")) }
            }
            (contact_form(None))
        }
    }
}

pub fn newsletter_form(error: Option<&str>) -> Markup {
    html! {
        article #newsletter {
            h3 { (t!("newsletter.title")) }
            p { (t!("newsletter.desc")) }
            form hx-post=(names::NEWSLETTER_URL)
                 hx-target="#newsletter"
                 hx-swap="outerHTML" {
                fieldset role="group" {
                    input name="email"
                          type="email"
                          autocomplete="email"
                          required="true"
                          placeholder=(t!("newsletter.email"))
                          aria-label=(t!("newsletter.email"));
                    button type="submit" { (t!("newsletter.subscribe")) }
                }
                @if let Some(error) = error {
                    small.form-error { (error) }
                }
            }
        }
    }
}

pub enum NewsletterState {
    Subscribed,
    AlreadySubscribed,
    InvalidEmail,
}

pub fn newsletter_result(state: NewsletterState) -> Markup {
    match state {
        NewsletterState::Subscribed => html! {
            article #newsletter {
                h3 { (t!("newsletter.subscribed_title")) }
                p { (t!("newsletter.subscribed_desc")) }
            }
        },
        NewsletterState::AlreadySubscribed => html! {
            article #newsletter {
                h3 { (t!("newsletter.already_title")) }
                p { (t!("newsletter.already_desc")) }
            }
        },
        NewsletterState::InvalidEmail => newsletter_form(Some(&t!("newsletter.invalid"))),
    }
}

pub fn contact_form(error: Option<&str>) -> Markup {
    html! {
        article #contact-form {
            h3 { (t!("contact.form_title")) }
            @if let Some(error) = error {
                p.form-error {
                    strong { (t!("contact.error_title")) ": " }
                    (error)
                }
            }
            form hx-post=(names::CONTACT_URL)
                 hx-target="#contact-form"
                 hx-swap="outerHTML" {
                label {
                    (t!("contact.name"))
                    input name="name" type="text" autocomplete="name" required="true";
                }
                label {
                    (t!("contact.email"))
                    input name="email" type="email" autocomplete="email" required="true";
                }
                label {
                    (t!("contact.subject"))
                    select name="subject" required="true" {
                        option { (t!("contact.subject_general")) }
                        option { (t!("contact.subject_support")) }
                        option { (t!("contact.subject_feedback")) }
                    }
                }
                label {
                    (t!("contact.message"))
                    textarea name="message" rows="5" required="true" {}
                }
                button type="submit" { (t!("contact.send")) }
            }
        }
    }
}

pub fn contact_sent() -> Markup {
    html! {
        article #contact-form {
            h3 { (t!("contact.sent_title")) }
            p { (t!("contact.sent_desc")) }
        }
    }
}
