fn main() {
    dioxus::launch(minxin_web::App);
}
