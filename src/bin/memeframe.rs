use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "memeframe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a captioned image as a PNG.
    Caption(CaptionArgs),
    /// Print the aspect-preserving placement for a frame/content pair.
    Fit(FitArgs),
}

#[derive(Parser, Debug)]
struct CaptionArgs {
    /// Input caption document JSON. Asset paths resolve relative to its
    /// parent directory.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Source image (alternative to --in; relative to the current dir).
    #[arg(long, conflicts_with = "in_path")]
    image: Option<String>,

    /// Caption stamped near the top edge.
    #[arg(long, default_value = "")]
    top: String,

    /// Caption stamped near the bottom edge.
    #[arg(long, default_value = "")]
    bottom: String,

    /// Font file for caption text (with --image).
    #[arg(long)]
    font: Option<String>,

    /// Canvas size in pixels (square, with --image).
    #[arg(long, default_value_t = 400)]
    canvas: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FitArgs {
    #[arg(long)]
    frame_width: f64,

    #[arg(long)]
    frame_height: f64,

    #[arg(long)]
    content_width: f64,

    #[arg(long)]
    content_height: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Caption(args) => cmd_caption(args),
        Command::Fit(args) => cmd_fit(args),
    }
}

fn read_doc_json(path: &Path) -> anyhow::Result<memeframe::CaptionDoc> {
    let f = File::open(path).with_context(|| format!("open document '{}'", path.display()))?;
    let r = BufReader::new(f);
    let doc: memeframe::CaptionDoc =
        serde_json::from_reader(r).with_context(|| "parse caption document JSON")?;
    Ok(doc)
}

fn cmd_caption(args: CaptionArgs) -> anyhow::Result<()> {
    let (doc, assets_root) = match (&args.in_path, &args.image) {
        (Some(in_path), _) => {
            let doc = read_doc_json(in_path)?;
            let root = in_path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
            (doc, root)
        }
        (None, Some(image)) => {
            let doc = memeframe::CaptionDoc {
                canvas: memeframe::Canvas {
                    width: args.canvas,
                    height: args.canvas,
                },
                image: image.clone(),
                top_text: args.top.clone(),
                bottom_text: args.bottom.clone(),
                style: memeframe::CaptionStyle {
                    font_source: args.font.clone().unwrap_or_default(),
                    ..memeframe::CaptionStyle::default()
                },
            };
            (doc, PathBuf::from("."))
        }
        (None, None) => anyhow::bail!("either --in or --image is required"),
    };

    doc.validate()?;
    let prepared = memeframe::PreparedDoc::prepare(&doc, &assets_root)?;
    let mut surface = memeframe::CpuSurface::new(doc.canvas)?;

    let frame = if doc.has_caption_text() {
        memeframe::render_captioned_frame(&doc, &prepared, &mut surface)?
    } else {
        memeframe::render_base_frame(&doc, &prepared, &mut surface)?
    };

    write_png(&frame, &args.out)?;
    println!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_fit(args: FitArgs) -> anyhow::Result<()> {
    let frame = memeframe::Frame::new(args.frame_width, args.frame_height)?;
    let content = memeframe::ContentSize::new(args.content_width, args.content_height)?;
    let placement = memeframe::compute_placement(frame, content);
    println!("{}", serde_json::to_string_pretty(&placement)?);
    Ok(())
}

fn write_png(frame: &memeframe::FrameRGBA, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let rgba = frame.to_straight_rgba8();
    let img = image::RgbaImage::from_raw(frame.width, frame.height, rgba)
        .context("frame byte length mismatch")?;
    img.save(out)
        .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}
