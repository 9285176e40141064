use yew::prelude::*;
use web_sys::{HtmlCanvasElement, CanvasRenderingContext2d};
use wasm_bindgen::JsCast;
use std::f64::consts::TAU;
use shared::math::{point_on_circle, Vec2};
use shared::shared_roulette_game::{RouletteColor, ROULETTE_GAME_VALUES};

pub const CANVAS_WIDTH: u32 = 512;
pub const CANVAS_HEIGHT: u32 = 512;

const CENTER: Vec2 = Vec2 {
    x: CANVAS_WIDTH as f64 / 2.0,
    y: CANVAS_HEIGHT as f64 / 2.0,
};
const WHEEL_FACE_SIZE: f64 = 412.0;
const WHEEL_FACE_RADIUS: f64 = WHEEL_FACE_SIZE / 2.0 - 15.0;
const BALL_CIRCLE_RADIUS: f64 = WHEEL_FACE_RADIUS + 15.0;
const RIM_RADIUS: f64 = WHEEL_FACE_RADIUS + 30.0;
const BALL_RADIUS: f64 = 15.0;
const HUB_RADIUS: f64 = 80.0;
const LABEL_RADIUS: f64 = 150.0;

#[derive(Properties, PartialEq)]
pub struct RouletteCanvasProps {
    pub ball_rotation: f64,
}

#[function_component(RouletteCanvas)]
pub fn roulette_canvas(props: &RouletteCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let ball_rotation = props.ball_rotation;

        use_effect_with(ball_rotation, move |ball_rotation| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let context = canvas
                    .get_context("2d")
                    .unwrap()
                    .unwrap()
                    .dyn_into::<CanvasRenderingContext2d>()
                    .unwrap();

                context.clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
                draw_wheel(&context);
                let ball_pos = point_on_circle(CENTER, BALL_CIRCLE_RADIUS, *ball_rotation);
                draw_ball(&context, ball_pos, BALL_RADIUS);
            }
            || ()
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={CANVAS_WIDTH.to_string()}
            height={CANVAS_HEIGHT.to_string()}
            class="max-w-full"
        />
    }
}

fn draw_wheel(context: &CanvasRenderingContext2d) {
    // Outer rim with a darker edge line just past it
    context.set_fill_style_str("#3e2723");
    context.begin_path();
    let _ = context.arc(CENTER.x, CENTER.y, RIM_RADIUS, 0.0, TAU);
    context.fill();
    context.set_stroke_style_str("#2d1c19");
    context.set_line_width(4.0);
    context.begin_path();
    let _ = context.arc(CENTER.x, CENTER.y, RIM_RADIUS + 2.0, 0.0, TAU);
    context.stroke();

    // Pocket wedges, one per playable number with a green spacer after each.
    // The face is decorative, the ball is not synced to a pocket when it stops.
    let wedge = TAU / (ROULETTE_GAME_VALUES.len() * 2) as f64;
    for (i, value) in ROULETTE_GAME_VALUES.iter().enumerate() {
        let start = 2.0 * i as f64 * wedge;
        let pocket_color = match value.color() {
            RouletteColor::Red => "#b71c1c",
            RouletteColor::Black => "#171717",
        };

        context.begin_path();
        context.set_fill_style_str(pocket_color);
        context.move_to(CENTER.x, CENTER.y);
        let _ = context.arc(CENTER.x, CENTER.y, WHEEL_FACE_RADIUS, start, start + wedge);
        context.fill();

        context.begin_path();
        context.set_fill_style_str("#1b5e20");
        context.move_to(CENTER.x, CENTER.y);
        let _ = context.arc(
            CENTER.x,
            CENTER.y,
            WHEEL_FACE_RADIUS,
            start + wedge,
            start + 2.0 * wedge,
        );
        context.fill();

        // Number label along the centerline of its pocket
        context.save();
        let _ = context.translate(CENTER.x, CENTER.y);
        let _ = context.rotate(start + wedge / 2.0);
        context.set_fill_style_str("#ffffff");
        context.set_font("bold 28px Arial");
        context.set_text_align("center");
        context.set_text_baseline("middle");
        let _ = context.fill_text(&value.number().to_string(), LABEL_RADIUS, 0.0);
        context.restore();
    }

    // Hub covering the wedge tips
    context.set_fill_style_str("#3e2723");
    context.begin_path();
    let _ = context.arc(CENTER.x, CENTER.y, HUB_RADIUS, 0.0, TAU);
    context.fill();
    context.set_stroke_style_str("#2d1c19");
    context.set_line_width(4.0);
    context.begin_path();
    let _ = context.arc(CENTER.x, CENTER.y, HUB_RADIUS, 0.0, TAU);
    context.stroke();
}

fn draw_ball(context: &CanvasRenderingContext2d, pos: Vec2, radius: f64) {
    // The gradient is anchored at the canvas origin rather than the ball, so
    // the shading shifts as the ball moves and it reads as spinning
    if let Ok(gradient) = context.create_radial_gradient(pos.x, pos.y, radius, 0.0, 0.0, 250.0) {
        let _ = gradient.add_color_stop(0.0, "#666");
        let _ = gradient.add_color_stop(1.0, "#999");
        context.set_fill_style_canvas_gradient(&gradient);
    }
    context.begin_path();
    let _ = context.arc(pos.x, pos.y, radius, 0.0, TAU);
    context.fill();
}
