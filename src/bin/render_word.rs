use std::path::PathBuf;

use anyhow::Result;
use log::info;
use structopt::StructOpt;

use verbum::{Camera, RenderSettings, Scene, SceneRenderer, Viewport};

#[derive(StructOpt, Debug)]
#[structopt(name = "Word Renderer")]
struct Opt {
    /// word to visualize (trimmed and lower-cased)
    #[structopt(name = "word")]
    word: String,

    #[structopt(name = "output_file", parse(from_os_str))]
    output_file: PathBuf,

    /// image/render width
    #[structopt(long, short, default_value = "600")]
    width: u32,

    /// image/render height
    #[structopt(long, default_value = "600")]
    height: u32,

    /// number of generation layers
    #[structopt(long, short, default_value = "5")]
    layers: u32,

    /// fixed entropy value; omit for a fresh look per run
    #[structopt(long)]
    entropy: Option<u64>,

    /// camera yaw in degrees
    #[structopt(long, default_value = "0")]
    yaw: f32,

    /// camera pitch in degrees
    #[structopt(long, default_value = "0")]
    pitch: f32,
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let word = opt.word.trim().to_lowercase();
    let scene = match opt.entropy {
        Some(entropy) => Scene::generate(&word, opt.layers, entropy),
        None => Scene::generate_now(&word, opt.layers),
    };
    info!(
        "generated {} shapes ({} drawable) for '{}'",
        scene.len(),
        scene.num_primitives(),
        word
    );

    let mut camera = Camera::new(Viewport::new([opt.width, opt.height]));
    camera.rotate(opt.yaw, opt.pitch);

    let renderer = SceneRenderer::new(RenderSettings::default());
    let frame = renderer.render(&scene, &camera);
    frame.save(&opt.output_file)?;
    info!("saved {}", opt.output_file.display());

    Ok(())
}
