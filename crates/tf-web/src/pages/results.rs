//! Results screen

use crate::api;
use crate::components::*;
use leptos::*;
use leptos_router::*;
use tf_core::report::share_text;
use tf_core::{RequestLimits, ResultsQuery, ResultsView, VerdictResult};

#[component]
pub fn ResultsPage() -> impl IntoView {
    let location = use_location();
    let query = create_memo(move |_| ResultsQuery::parse(&location.search.get()));
    let (state, set_state) = create_signal(ResultsView::MissingClaim);
    let (shared, set_shared) = create_signal(None::<String>);
    let (limits, set_limits) = create_signal(None::<RequestLimits>);

    // Validate against the limits the server enforces
    spawn_local(async move {
        let fetched = match api::limits().await {
            Ok(limits) => limits,
            Err(e) => {
                tracing::warn!("Falling back to default limits: {}", e);
                RequestLimits::default()
            }
        };
        set_limits.set(Some(fetched));
    });

    create_effect(move |_| {
        let Some(server_limits) = limits.get() else {
            return;
        };
        let next = ResultsView::begin(&query.get(), &server_limits);
        let pending = next.pending_request().cloned();
        set_state.set(next);
        set_shared.set(None);

        if let Some(request) = pending {
            spawn_local(async move {
                let outcome = api::verify(&request).await;
                set_state.update(|view| {
                    // Ignore outcomes for a query that has since changed
                    if view.pending_request() == Some(&request) {
                        let current = std::mem::replace(view, ResultsView::MissingClaim);
                        *view = current.finish(outcome);
                    }
                });
            });
        }
    });

    let navigate = use_navigate();
    let go_home = move |_| navigate("/", Default::default());

    let copy_link = move |_| {
        let origin = window().location().origin().unwrap_or_default();
        set_shared.set(Some(query.with(|q| q.share_url(&origin))));
    };

    let share = move |_| {
        let limits = limits.get().unwrap_or_default();
        let text = state.with(|view| view.result().cloned()).and_then(|result| {
            query
                .with(|q| q.to_request(&limits).ok())
                .map(|request| share_text(&request, &result))
        });
        set_shared.set(text);
    };

    view! {
        <div class="mx-auto max-w-4xl space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <A href="/" class="flex items-center gap-2 text-gray-600 hover:text-gray-800">
                    "← Back to Search"
                </A>
                <div class="flex items-center gap-2">
                    <button
                        class="px-3 py-1 border rounded-lg text-sm disabled:opacity-50"
                        prop:disabled=move || state.with(|v| v.result().is_none())
                        on:click=share
                    >
                        "Share"
                    </button>
                    <button class="px-3 py-1 border rounded-lg text-sm" on:click=copy_link>
                        "Copy Link"
                    </button>
                </div>
            </div>

            <Show when=move || shared.get().is_some()>
                <textarea
                    readonly
                    rows="4"
                    class="w-full p-3 border rounded-lg text-sm text-gray-700 bg-white"
                    prop:value=move || shared.get().unwrap_or_default()
                ></textarea>
            </Show>

            {move || query.with(|q| {
                q.has_claim().then(|| view! { <ClaimPanel claim=q.claim.clone()/> })
            })}

            {move || match state.get() {
                _ if limits.with(Option::is_none) => view! { <LoadingPanel/> }.into_view(),
                ResultsView::MissingClaim => view! {
                    <ErrorPanel
                        title="No claim to verify"
                        message="Enter a claim on the search page to see a verdict.".to_string()
                    />
                }.into_view(),
                ResultsView::Loading(_) => view! { <LoadingPanel/> }.into_view(),
                ResultsView::Ready(result) => view! { <ResultGrid result=result/> }.into_view(),
                ResultsView::Failed(err) => {
                    let title = if err.is_validation() {
                        "Invalid claim"
                    } else {
                        "Verification failed"
                    };
                    view! { <ErrorPanel title=title message=err.to_string()/> }.into_view()
                }
            }}

            <div class="flex justify-center gap-4 pt-8">
                <button
                    class="bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white px-8 py-3 rounded-xl shadow-lg"
                    on:click=go_home
                >
                    "Check Another Claim"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ResultGrid(result: VerdictResult) -> impl IntoView {
    let verdict = result.verdict();
    let confidence = result.confidence();
    let explanation = result.explanation().to_string();
    let source = result.source().to_string();
    let source_url = result.source_url().map(str::to_string);
    let excerpt = result.extracted_text().to_string();

    view! {
        <div class="grid gap-6">
            <div class="bg-white/90 backdrop-blur-sm rounded-xl shadow-xl p-8">
                <VerdictBadge verdict=verdict/>
            </div>

            <ResultCard icon="📊" title="Confidence Score">
                <ConfidenceBar confidence=confidence/>
            </ResultCard>

            <ResultCard icon="🧠" title="Explanation">
                <p class="text-gray-700 leading-relaxed text-base">{explanation}</p>
            </ResultCard>

            <ResultCard icon="📚" title="Source">
                <p class="text-base font-medium text-gray-800">{source}</p>
            </ResultCard>

            {source_url.map(|url| view! { <SourceLinkCard url=url/> })}

            <ExcerptCard text=excerpt/>
        </div>
    }
}
