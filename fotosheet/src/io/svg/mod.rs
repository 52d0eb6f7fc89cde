pub mod svg_util;

#[doc(inline)]
pub use svg_util::SvgDrawOptions;
#[doc(inline)]
pub use svg_util::SvgPageTheme;

use crate::entities::{BorderStyle, Page, PrintJob};
use crate::geometry::Size;
use crate::raster;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Renders one laid-out page to an SVG document, in page-space cm.
pub fn page_to_svg(page: &Page, job: &PrintJob, options: SvgDrawOptions, title: &str) -> Document {
    let sheet = job.sheet;
    let theme = &options.theme;

    let vbox = {
        // 5% of padding around the sheet
        let pad = 0.05 * f32::max(sheet.width, sheet.height);
        (
            -pad,
            -pad,
            sheet.width + 2.0 * pad,
            sheet.height + 2.0 * pad,
        )
    };

    let stroke_width =
        f32::min(sheet.width, sheet.height) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the left top of the sheet
        let label_content = format!(
            "width: {:.1} | height: {:.1} | slots: {} | density: {:.3}% | {}",
            sheet.width,
            sheet.height,
            page.placed.len(),
            page.density(sheet) * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set(
                "y",
                -0.5 * 0.025 * f32::min(sheet.width, sheet.height),
            )
            .set("font-size", f32::min(sheet.width, sheet.height) * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw sheet
    let sheet_group = {
        let title = Title::new(format!("sheet, {:.1}x{:.1}cm", sheet.width, sheet.height));
        Group::new().set("id", "sheet").add(
            svg_util::rect(
                0.0,
                0.0,
                sheet.width,
                sheet.height,
                &[
                    ("fill", &*format!("{}", theme.sheet_fill)),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            )
            .add(title),
        )
    };

    //draw slots
    let slots_group = {
        let mut slots_group = Group::new().set("id", "slots");
        for (i, pp) in page.placed.iter().enumerate() {
            let photo = job.photo(pp.key);
            let fill = match pp.rotated {
                true => theme.rotated_slot_fill,
                false => theme.slot_fill,
            };
            let geo = raster::slot_geometry(
                photo.px_w,
                photo.px_h,
                Size::new(pp.rect.w, pp.rect.h),
                job.settings.border,
                job.settings.fit,
            );
            let crop_note = match geo.crop {
                Some(c) => format!(
                    "crop: [x: {:.0}, y: {:.0}, w: {:.0}, h: {:.0}]px",
                    c.x, c.y, c.w, c.h
                ),
                None => String::from("full source"),
            };
            let title = Title::new(format!(
                "photo {}, slot {}: [x: {:.2}, y: {:.2}, w: {:.2}, h: {:.2}]{}, {}",
                photo.id,
                i,
                pp.rect.x,
                pp.rect.y,
                pp.rect.w,
                pp.rect.h,
                if pp.rotated { ", rotated" } else { "" },
                crop_note,
            ));
            let mut slot = Group::new()
                .add(
                    svg_util::rect(
                        pp.rect.x,
                        pp.rect.y,
                        pp.rect.w,
                        pp.rect.h,
                        &[
                            ("fill", &*format!("{}", fill)),
                            ("fill-opacity", "0.8"),
                            ("stroke", "black"),
                            ("stroke-width", &*format!("{}", stroke_width)),
                        ],
                    )
                    .add(title),
                );
            if options.usable_area && job.settings.border != BorderStyle::None {
                let usable =
                    raster::usable_rect(Size::new(pp.rect.w, pp.rect.h), job.settings.border);
                slot = slot.add(svg_util::rect(
                    pp.rect.x + usable.x,
                    pp.rect.y + usable.y,
                    usable.w,
                    usable.h,
                    &[
                        ("fill", "none"),
                        ("stroke", "black"),
                        ("stroke-opacity", "0.5"),
                        ("stroke-width", &*format!("{}", 0.5 * stroke_width)),
                        ("stroke-dasharray", &*format!("{}", 2.0 * stroke_width)),
                        ("stroke-linecap", "round"),
                    ],
                ));
            }
            slots_group = slots_group.add(slot);
        }
        slots_group
    };

    //draw margin guide
    let margin_guide_group = {
        let mut group = Group::new().set("id", "margin_guide");
        if options.margin_guide && job.settings.margin > 0.0 {
            let m = job.settings.margin;
            group = group.add(svg_util::rect(
                m,
                m,
                sheet.width - 2.0 * m,
                sheet.height - 2.0 * m,
                &[
                    ("fill", "none"),
                    ("stroke", "black"),
                    ("stroke-opacity", "0.3"),
                    ("stroke-width", &*format!("{}", 0.5 * stroke_width)),
                    (
                        "stroke-dasharray",
                        &*format!("{} {}", stroke_width, 2.0 * stroke_width),
                    ),
                    ("stroke-linecap", "round"),
                ],
            ));
        }
        group
    };

    let document = Document::new()
        .set("viewBox", vbox)
        .add(sheet_group)
        .add(slots_group)
        .add(margin_guide_group);

    match options.label {
        true => document.add(label),
        false => document,
    }
}
