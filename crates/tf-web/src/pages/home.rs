//! Submission screen

use leptos::*;
use leptos_router::*;
use tf_core::SubmissionForm;

#[component]
pub fn HomePage() -> impl IntoView {
    let form = create_rw_signal(SubmissionForm::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(query) = form.try_update(|f| f.submit()).flatten() {
            tracing::debug!("Submitting claim ({} chars)", query.claim.chars().count());
            navigate(&query.href(), Default::default());
        }
    };

    view! {
        <div class="mx-auto max-w-4xl space-y-12">
            // Hero
            <div class="text-center space-y-6">
                <div class="inline-flex items-center gap-2 bg-blue-100 text-blue-700 px-4 py-2 rounded-full text-sm font-medium">
                    "Evidence-Based Fact Verification"
                </div>
                <h1 class="text-5xl md:text-6xl font-bold bg-gradient-to-r from-blue-600 via-purple-600 to-blue-800 bg-clip-text text-transparent leading-tight">
                    "Truth Finder"
                </h1>
                <p class="text-xl text-gray-600 max-w-2xl mx-auto leading-relaxed">
                    "Verify any claim and get an evidence-based verdict with a confidence score "
                    "and the source behind it."
                </p>
            </div>

            // Form
            <div class="bg-white/80 backdrop-blur-sm rounded-xl shadow-2xl p-8">
                <div class="text-center pb-6">
                    <h2 class="text-2xl font-semibold text-gray-800">"Submit Your Claim"</h2>
                    <p class="text-base text-gray-600">
                        "Enter any factual statement you'd like us to verify"
                    </p>
                </div>

                <form on:submit=on_submit class="space-y-8">
                    <div class="space-y-3">
                        <label for="claim" class="text-base font-semibold text-gray-700">
                            "Enter a factual claim *"
                        </label>
                        <input
                            id="claim"
                            type="text"
                            placeholder="e.g., Vaccines cause autism in children"
                            class="w-full text-base py-4 px-4 border-2 border-gray-200 focus:border-blue-400 rounded-xl"
                            on:input=move |ev| form.update(|f| f.claim = event_target_value(&ev))
                            prop:value=move || form.with(|f| f.claim.clone())
                        />
                    </div>

                    <div class="space-y-3">
                        <label for="evidence" class="text-base font-semibold text-gray-700">
                            "Supporting Evidence "
                            <span class="text-gray-400 font-normal">"(optional)"</span>
                        </label>
                        <textarea
                            id="evidence"
                            rows="5"
                            placeholder="Provide any additional context, sources, or background information..."
                            class="w-full text-base p-4 border-2 border-gray-200 focus:border-blue-400 rounded-xl resize-none"
                            on:input=move |ev| form.update(|f| f.evidence = event_target_value(&ev))
                            prop:value=move || form.with(|f| f.evidence.clone())
                        ></textarea>
                    </div>

                    <button
                        type="submit"
                        class="w-full text-lg py-6 text-white bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 rounded-xl shadow-lg disabled:opacity-50"
                        prop:disabled=move || !form.with(|f| f.can_submit())
                    >
                        {move || if form.with(|f| f.is_submitting()) {
                            "Analyzing Claim..."
                        } else {
                            "Verify Claim"
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
