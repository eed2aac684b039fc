//! Interprets the core's draw commands onto a 2D canvas context. The field
//! never touches the context; this module is the only code that draws.

use folio_core::draw::DrawCommand;
use web_sys as web;

use crate::constants::{GLOW_BLUR_PX, GLOW_FILL, GLOW_SHADOW};

pub fn draw(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64, commands: &[DrawCommand]) {
    ctx.clear_rect(0.0, 0.0, width, height);
    for command in commands {
        match command {
            DrawCommand::Glow {
                center,
                radius,
                alpha,
            } => {
                ctx.save();
                ctx.set_global_alpha(*alpha as f64);
                ctx.set_shadow_blur(GLOW_BLUR_PX);
                ctx.set_shadow_color(GLOW_SHADOW);
                ctx.set_fill_style_str(GLOW_FILL);
                ctx.begin_path();
                let _ = ctx.arc(
                    center.x as f64,
                    center.y as f64,
                    *radius as f64,
                    0.0,
                    std::f64::consts::TAU,
                );
                ctx.fill();
                ctx.restore();
            }
            DrawCommand::Ribbon {
                points,
                color,
                alpha,
                width,
            } => {
                if points.len() < 2 {
                    continue;
                }
                ctx.save();
                ctx.set_global_alpha(*alpha as f64);
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*width as f64);
                ctx.set_line_cap("round");
                ctx.begin_path();
                ctx.move_to(points[0].x as f64, points[0].y as f64);
                for p in &points[1..] {
                    ctx.line_to(p.x as f64, p.y as f64);
                }
                ctx.stroke();
                ctx.restore();
            }
        }
    }
}
