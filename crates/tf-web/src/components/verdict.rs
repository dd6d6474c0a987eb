//! Verdict badge and confidence bar

use leptos::*;
use tf_core::{Confidence, Verdict};

/// Colour and glyphs for one verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictStyle {
    pub badge_class: &'static str,
    pub icon_class: &'static str,
    pub emoji: &'static str,
}

pub fn verdict_style(verdict: Verdict) -> VerdictStyle {
    match verdict {
        Verdict::Supported => VerdictStyle {
            badge_class: "text-green-600 bg-green-50 border-green-200",
            icon_class: "text-green-600",
            emoji: "✅",
        },
        Verdict::Refuted => VerdictStyle {
            badge_class: "text-red-600 bg-red-50 border-red-200",
            icon_class: "text-red-600",
            emoji: "❌",
        },
        Verdict::Neutral => VerdictStyle {
            badge_class: "text-yellow-600 bg-yellow-50 border-yellow-200",
            icon_class: "text-yellow-600",
            emoji: "⚖️",
        },
    }
}

/// CSS width of the filled part of the confidence bar
pub fn confidence_width(confidence: Confidence) -> String {
    format!("width: {}%", confidence.percent())
}

#[component]
pub fn VerdictBadge(verdict: Verdict) -> impl IntoView {
    let style = verdict_style(verdict);

    view! {
        <div class="flex items-center gap-4">
            <div class=format!("text-4xl {}", style.icon_class)>{style.emoji}</div>
            <div>
                <h3 class="text-lg font-semibold text-gray-700 mb-2">"Verdict"</h3>
                <div class=format!(
                    "inline-flex px-4 py-2 rounded-full border-2 font-semibold text-lg {}",
                    style.badge_class
                )>
                    {verdict.as_str()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ConfidenceBar(confidence: Confidence) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            <div class="text-3xl font-bold text-blue-600">{confidence.to_string()}</div>
            <div class="flex-1 bg-gray-200 rounded-full h-3">
                <div
                    class="bg-gradient-to-r from-blue-500 to-purple-500 h-3 rounded-full transition-all duration-1000 ease-out"
                    style=confidence_width(confidence)
                ></div>
            </div>
        </div>
    }
}
