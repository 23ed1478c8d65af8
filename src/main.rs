mod animation;
mod app;
mod artwork;
mod config;
mod library;
mod navigation;
mod runtime;
mod screens;
mod share;
mod strings;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
