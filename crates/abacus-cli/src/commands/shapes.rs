use abacus_core::{Rectangle, Shape, Square};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::output::OutputFormat;

#[derive(Args)]
pub struct ShapesArgs {
    #[command(subcommand)]
    pub shape: ShapeKind,
}

#[derive(Subcommand)]
pub enum ShapeKind {
    /// A rectangle with the given width and height
    Rect {
        width: u32,
        height: u32,
        #[command(flatten)]
        opts: ShapeOpts,
    },
    /// A square with the given side
    Square {
        side: u32,
        #[command(flatten)]
        opts: ShapeOpts,
    },
}

#[derive(Args)]
pub struct ShapeOpts {
    /// Also count how many WxH rectangles fit inside
    #[arg(long, value_name = "WxH", value_parser = parse_dims)]
    pub inside: Option<(u32, u32)>,

    /// Draw the shape with '*'
    #[arg(long)]
    pub picture: bool,
}

fn parse_dims(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok((w, h))
}

pub fn run(args: &ShapesArgs, format: OutputFormat) -> Result<()> {
    match &args.shape {
        ShapeKind::Rect {
            width,
            height,
            opts,
        } => describe(&Rectangle::new(*width, *height), opts, format),
        ShapeKind::Square { side, opts } => describe(&Square::new(*side), opts, format),
    }
}

fn describe<S: Shape + std::fmt::Display>(
    shape: &S,
    opts: &ShapeOpts,
    format: OutputFormat,
) -> Result<()> {
    let inside = opts
        .inside
        .map(|(w, h)| {
            shape
                .amount_inside(&Rectangle::new(w, h))
                .with_context(|| format!("Cannot fit {w}x{h} inside {shape}"))
        })
        .transpose()?;
    let picture = opts.picture.then(|| shape.picture());

    match format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "shape": shape.to_string(),
                "width": shape.width(),
                "height": shape.height(),
                "area": shape.area(),
                "perimeter": shape.perimeter(),
                "diagonal": shape.diagonal(),
                "amount_inside": inside,
                "picture": picture,
            });
            println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        }
        OutputFormat::Text => {
            println!("{shape}");
            println!("Area:      {}", shape.area());
            println!("Perimeter: {}", shape.perimeter());
            println!("Diagonal:  {}", shape.diagonal());
            if let (Some(n), Some((w, h))) = (inside, opts.inside) {
                println!("Fits {n} of {w}x{h}");
            }
            if let Some(p) = picture {
                print!("{p}");
            }
        }
    }
    Ok(())
}
