use leptos::*;
use shared::gallery;

use crate::components::accordion::AccordionView;

#[component]
pub fn App() -> impl IntoView {
    let sections = gallery::examples()
        .into_iter()
        .map(|example| {
            view! {
                <section class="pf-c-page__main-section">
                    <h2 class="pf-c-title pf-m-lg">{example.title}</h2>
                    <AccordionView accordion=example.accordion />
                </section>
            }
        })
        .collect_view();

    view! {
        <main>
            {sections}
        </main>
    }
}
