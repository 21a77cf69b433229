use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use log::info;
use structopt::StructOpt;

use verbum::{
    DisplaySurface, FrameBuffer, InputEvent, Key, KeyState, Viewport, Visualizer,
    KEY_ROTATE_STEP,
};

#[derive(StructOpt, Debug)]
#[structopt(name = "Turntable")]
struct Opt {
    /// word to visualize
    #[structopt(name = "word")]
    word: String,

    #[structopt(name = "output", parse(from_os_str))]
    output_folder: PathBuf,

    /// number of frames; each frame advances yaw by one arrow-key step
    #[structopt(long, short, default_value = "72")]
    frames: u32,

    /// image width and height
    #[structopt(long, short, default_value = "600")]
    size: u32,

    /// number of generation layers
    #[structopt(long, short, default_value = "5")]
    layers: u32,

    /// fixed entropy value; omit for a fresh look per run
    #[structopt(long)]
    entropy: Option<u64>,
}

/// Captures presented frames so the main loop can write them out.
#[derive(Default)]
struct CaptureSurface {
    frame: Option<FrameBuffer>,
    fps: f32,
}

impl DisplaySurface for CaptureSurface {
    fn present(&mut self, frame: &FrameBuffer) {
        self.frame = Some(frame.clone());
    }

    fn set_status(&mut self, status: &str) {
        info!("{}", status);
    }

    fn set_fps(&mut self, fps: f32) {
        self.fps = fps;
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    fs::create_dir_all(&opt.output_folder)?;

    let mut viz = Visualizer::new(Viewport::new([opt.size, opt.size])).with_layers(opt.layers);
    let mut surface = CaptureSurface::default();

    match opt.entropy {
        Some(entropy) => viz.submit_word_seeded(&opt.word, entropy, &mut surface),
        None => viz.submit_word(&opt.word, &mut surface),
    }

    for i in 0..opt.frames {
        if i > 0 {
            viz.handle_event(
                InputEvent::Key {
                    key: Key::ArrowRight,
                    state: KeyState::Pressed,
                },
                &mut surface,
            );
        }
        if let Some(frame) = surface.frame.take() {
            let path = opt.output_folder.join(format!("frame_{:04}.png", i));
            frame.save(&path)?;
        }
    }

    info!(
        "wrote {} frames ({} degrees of yaw) to {}, last frame at {:.1} fps",
        opt.frames,
        opt.frames.saturating_sub(1) as f32 * KEY_ROTATE_STEP,
        opt.output_folder.display(),
        surface.fps
    );

    Ok(())
}
