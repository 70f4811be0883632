mod ambient;
mod anim;
mod app;
mod audio;
mod carousel;
mod config;
mod library;
mod playback;
mod runtime;
mod ui;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
