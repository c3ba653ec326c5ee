//! Entry point for the WASM application

fn main() {
    filechain_frontend::mount();
}
