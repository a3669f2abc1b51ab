// src/main.rs
// Lists extracurricular activities from the REST backend and lets students
// sign up for or unregister from them.

mod api;
mod app;
mod config;
mod error;
mod model;
mod state;

fn main() {
    yew::Renderer::<app::App>::new().render();
}
