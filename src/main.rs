fn main() {
    yew::Renderer::<pv_dashboard::App>::new().render();
}
