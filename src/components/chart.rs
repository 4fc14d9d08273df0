use charming::{Chart as CharmingChart, renderer::WasmRenderer};
use gloo::console;
use gloo::events::EventListener;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Renders a charming chart into the element `id` inside `container_ref`, and
/// again on every window resize. The chart is rebuilt only when `deps` change.
#[hook]
pub fn use_chart<D: PartialEq + 'static>(
    id: &'static str,
    deps: D,
    build: fn(&D) -> CharmingChart,
) -> NodeRef {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with((deps, container_ref), move |(deps, container_ref)| {
            let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                let chart = build(deps);
                render_chart(&container, id, &chart);

                web_sys::window().map(|window| {
                    EventListener::new(&window, "resize", move |_| {
                        render_chart(&container, id, &chart);
                    })
                })
            });

            move || drop(listener)
        });
    }

    container_ref
}

fn render_chart(container: &HtmlElement, id: &str, chart: &CharmingChart) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(id, chart) {
        console::error!(&format!("Render error in {id}: {e:?}"));
    }
}
