//! Main application component

use leptos::*;
use leptos_router::*;
use crate::pages::*;
use crate::components::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-purple-50">
                <Header/>
                <main class="relative z-10 py-8 px-4">
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/results" view=ResultsPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
