//! Page header

use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <nav class="bg-white/80 backdrop-blur-sm shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <a href="/" class="text-xl font-bold text-gray-900">
                            "Truth Finder"
                        </a>
                    </div>
                    <div class="flex items-center">
                        <span class="text-sm text-gray-500">"Evidence-based claim verification"</span>
                    </div>
                </div>
            </div>
        </nav>
    }
}
