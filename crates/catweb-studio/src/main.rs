use anyhow::{bail, Context, Result};
use catweb_core::coords::{PositionVector, ScaleOffset, SizeVector, Vec2};
use catweb_core::logging::{init_logging, LoggingConfig};
use catweb_core::paint::{ColorGradient, GradientStop, TransparencyGradient};
use catweb_core::{HexColor, Rotation, UnitFraction};
use catweb_schema::domains::{
    FontStyle, FontWeight, HorizontalAlignment, ProductType, TextSize, Truncate, VerticalAlignment,
};
use catweb_schema::elements::{Button, Donation, Frame, GradientDecorator, Text};
use catweb_schema::{Element, GuiBase, Page, TextStyle};

const VIEWPORT_VAR: &str = "CATWEB_VIEWPORT";
const DEFAULT_VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let viewport = match std::env::var(VIEWPORT_VAR) {
        Ok(raw) => parse_viewport(&raw).with_context(|| format!("reading {VIEWPORT_VAR}"))?,
        Err(_) => DEFAULT_VIEWPORT,
    };

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          CATWEB STUDIO  v0.1           ║");
    println!("  ║   layout values  ·  element catalog    ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let (page, elements) = sample_page().context("building sample page")?;
    log::info!(
        "page {:?} on {} at {}x{}",
        page.page_title,
        page.background_color,
        viewport.x,
        viewport.y
    );

    for element in &elements {
        match element.base() {
            Some(base) => {
                let rect = base.pixel_rect(viewport.x, viewport.y);
                let center = rect.center();
                log::info!(
                    "{:<9} {:<10} origin=({:.1}, {:.1}) size={:.1}x{:.1} center=({:.1}, {:.1}) rot={}°",
                    element.kind(),
                    element.name(),
                    rect.origin.x,
                    rect.origin.y,
                    rect.size.x,
                    rect.size.y,
                    center.x,
                    center.y,
                    base.rotation.normalized_180(),
                );
            }
            None => log::info!("{:<9} {:<10} (decorator)", element.kind(), element.name()),
        }

        if let Element::Gradient(gradient) = element {
            for step in 0..=4 {
                let t = f64::from(step) / 4.0;
                let (color, transparency) = gradient
                    .sample_at(t)
                    .with_context(|| format!("sampling {} at {t}", gradient.name))?;
                log::info!("  t={t:.2} color={color} transparency={transparency:.3}");
            }
        }
    }

    Ok(())
}

/// Parses `"WIDTHxHEIGHT"` into a positive pixel size.
fn parse_viewport(raw: &str) -> Result<Vec2> {
    let (w, h) = raw
        .trim()
        .split_once(['x', 'X'])
        .with_context(|| format!("expected WIDTHxHEIGHT, got {raw:?}"))?;
    let width: f64 = w.trim().parse().with_context(|| format!("invalid width {w:?}"))?;
    let height: f64 = h.trim().parse().with_context(|| format!("invalid height {h:?}"))?;
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        bail!("viewport must be positive and finite, got {width}x{height}");
    }
    Ok(Vec2::new(width, height))
}

fn so(scale: f64, offset: f64) -> Result<ScaleOffset> {
    Ok(ScaleOffset::new(scale, offset)?)
}

fn gui(position: PositionVector, size: SizeVector, anchor: Vec2, layer: i32) -> Result<GuiBase> {
    Ok(GuiBase {
        background_transparency: UnitFraction::new(0.0)?,
        background_color: HexColor::new("#1e1e2e")?,
        position,
        size,
        rotation: Rotation::default(),
        anchor_point: anchor,
        layer,
        tooltip: String::new(),
        clip_descendants: false,
        visible: true,
    })
}

fn label_style(weight: FontWeight, size: TextSize) -> Result<TextStyle> {
    Ok(TextStyle {
        font: "Gotham".into(),
        font_style: FontStyle::Normal,
        font_weight: weight,
        horizontal_alignment: HorizontalAlignment::Center,
        vertical_alignment: VerticalAlignment::Center,
        text_size: size,
        text_color: HexColor::new("#cdd6f4")?,
        text_transparency: UnitFraction::new(0.0)?,
        rich: false,
        wrap: true,
        truncate: Truncate::AtEnd,
    })
}

fn sample_page() -> Result<(Page, Vec<Element>)> {
    let page = Page {
        background_color: HexColor::new("#11111b")?,
        page_title: "Studio sample".into(),
        icon: 0,
        search_description: "layout value showcase".into(),
        thumbnail: 0,
    };

    let header = Frame {
        name: "header".into(),
        base: gui(
            PositionVector::new(so(0.0, 0.0)?, so(0.0, 0.0)?),
            SizeVector::new(so(1.0, 0.0)?, so(0.0, 64.0)?),
            Vec2::zero(),
            1,
        )?,
    };

    let title = Text {
        name: "title".into(),
        text: "Hello from CatWeb".into(),
        style: label_style(FontWeight::Bold, TextSize::Scaled)?,
        base: gui(
            PositionVector::new(so(0.5, 0.0)?, so(0.0, 32.0)?),
            SizeVector::new(so(0.6, 0.0)?, so(0.0, 40.0)?),
            Vec2::new(0.5, 0.5),
            2,
        )?,
    };

    let mut badge = Button {
        name: "badge".into(),
        text: "NEW".into(),
        style: label_style(FontWeight::Heavy, TextSize::Pixels(14.0))?,
        automatic_color: false,
        base: gui(
            PositionVector::new(so(1.0, -24.0)?, so(0.0, 24.0)?),
            SizeVector::new(so(0.0, 72.0)?, so(0.0, 28.0)?),
            Vec2::new(1.0, 0.0),
            3,
        )?,
    };
    badge.base.rotation.set(-15.0);
    badge.base.rotation.add(370.0);

    let tip = Donation {
        name: "tip".into(),
        item_id: 0,
        reference: String::new(),
        product_type: ProductType::Gamepass,
        text: "Support".into(),
        style: label_style(FontWeight::Medium, TextSize::Pixels(16.0))?,
        automatic_color: true,
        base: gui(
            PositionVector::new(so(0.5, 0.0)?, so(1.0, -32.0)?),
            SizeVector::new(so(0.25, 0.0)?, so(0.0, 48.0)?),
            Vec2::new(0.5, 1.0),
            2,
        )?,
    };

    let fade = GradientDecorator {
        name: "fade".into(),
        rotation: Rotation::new(90.0),
        offset: Vec2::zero(),
        transparency: TransparencyGradient::new(vec![
            GradientStop::new(0.0, 0.0)?,
            GradientStop::new(0.7, 0.2)?,
            GradientStop::new(1.0, 1.0)?,
        ])?,
        color: ColorGradient::new(vec![
            GradientStop::new(0.0, HexColor::new("#89b4fa")?)?,
            GradientStop::new(0.5, HexColor::new("#cba6f7")?)?,
        ])?,
    };

    let elements = vec![
        Element::from(header),
        title.into(),
        badge.into(),
        tip.into(),
        fade.into(),
    ];
    Ok((page, elements))
}
