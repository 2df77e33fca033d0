use trinity_site::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
