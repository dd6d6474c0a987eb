//! Cards making up the results screen

use leptos::*;

#[component]
pub fn ResultCard(icon: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-white/90 backdrop-blur-sm rounded-xl shadow-xl p-8">
            <div class="flex gap-4">
                <div class="text-4xl flex-shrink-0">{icon}</div>
                <div class="flex-1">
                    <h3 class="text-lg font-semibold text-gray-700 mb-3">{title}</h3>
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ClaimPanel(claim: String) -> impl IntoView {
    view! {
        <div class="bg-white/80 backdrop-blur-sm rounded-xl shadow-lg p-6">
            <h2 class="text-sm font-medium text-gray-500 mb-2">"CLAIM ANALYZED"</h2>
            <p class="text-lg font-medium text-gray-800 leading-relaxed">"\""{claim}"\""</p>
        </div>
    }
}

#[component]
pub fn ExcerptCard(text: String) -> impl IntoView {
    view! {
        <ResultCard icon="🧾" title="Extracted Text">
            <blockquote class="border-l-4 border-blue-300 pl-6 py-4 bg-blue-50/50 rounded-r-lg">
                <p class="text-gray-700 italic leading-relaxed text-base">"\""{text}"\""</p>
            </blockquote>
        </ResultCard>
    }
}

#[component]
pub fn SourceLinkCard(url: String) -> impl IntoView {
    view! {
        <ResultCard icon="🔗" title="Reference Link">
            <a
                href=url.clone()
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center gap-2 text-blue-600 hover:text-blue-800 hover:underline transition-colors text-base break-all"
            >
                {url}
            </a>
        </ResultCard>
    }
}

#[component]
pub fn LoadingPanel() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-24">
            <div class="text-center space-y-4">
                <div class="animate-spin rounded-full h-12 w-12 border-4 border-blue-600 border-t-transparent mx-auto"></div>
                <p class="text-lg font-medium text-gray-600">"Analyzing your claim..."</p>
                <p class="text-sm text-gray-500">"This may take a few moments"</p>
            </div>
        </div>
    }
}

#[component]
pub fn ErrorPanel(title: &'static str, message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6">
            <h3 class="font-semibold text-red-700 mb-1">{title}</h3>
            <p class="text-sm text-red-600">{message}</p>
        </div>
    }
}
