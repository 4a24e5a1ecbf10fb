//! Entry point for the WASM application

pub fn main() {
    heartcare_frontend::mount();
}
