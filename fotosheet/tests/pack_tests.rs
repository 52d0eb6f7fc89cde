#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use test_case::test_case;

    use fotosheet::entities::{
        LengthUnit, OrientationPolicy, Photo, PrintFormat, PrintJob, PrintSettings, Sheet,
        StandardFormat,
    };
    use fotosheet::pack::{oriented_slot, pack};
    use fotosheet::util::CM_TOL;
    use fotosheet::util::assertions;

    const EPS: f32 = 1e-4;

    fn build_job(photos: &[(u32, u32, usize)], settings: PrintSettings, sheet: Sheet) -> PrintJob {
        let mut job = PrintJob::new(settings, sheet).unwrap();
        for (i, &(px_w, px_h, copies)) in photos.iter().enumerate() {
            job.add_photo(Photo::new(i, px_w, px_h, copies).unwrap());
        }
        job
    }

    #[test]
    fn two_slots_per_row_on_a4() {
        // three 10x15 slots, unknown dimensions: two fit a row, the third
        // wraps and no longer fits below the first row of an A4 sheet
        let job = build_job(
            &[(0, 0, 1), (0, 0, 1), (0, 0, 1)],
            PrintSettings::default(),
            Sheet::A4,
        );
        let pages = pack(&job);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].placed.len(), 2);
        assert_eq!(pages[1].placed.len(), 1);

        // centering shifts the first row (content 20.2cm wide) by 0.1cm
        let first = &pages[0].placed[0].rect;
        let second = &pages[0].placed[1].rect;
        assert!(approx_eq!(f32, first.x, 0.4, epsilon = EPS));
        assert!(approx_eq!(f32, first.y, 0.3, epsilon = EPS));
        assert!(approx_eq!(f32, second.x, 10.6, epsilon = EPS));
        assert!(approx_eq!(f32, second.y, 0.3, epsilon = EPS));

        // the lone slot on the second page is centered
        let third = &pages[1].placed[0].rect;
        assert!(approx_eq!(f32, third.x, 5.5, epsilon = EPS));
        assert!(approx_eq!(f32, third.y, 0.3, epsilon = EPS));
    }

    #[test]
    fn forced_portrait_swaps_landscape_format() {
        // custom 15x10cm format under a portrait policy: every slot is
        // swapped to 10x15 and flagged as rotated
        let settings = PrintSettings {
            format: PrintFormat::Custom {
                width: 15.0,
                height: 10.0,
                unit: LengthUnit::Cm,
            },
            orientation: OrientationPolicy::Portrait,
            ..PrintSettings::default()
        };
        let job = build_job(&[(4000, 3000, 2), (0, 0, 1)], settings, Sheet::A4);
        let pages = pack(&job);

        for pp in pages.iter().flat_map(|p| &p.placed) {
            assert!(approx_eq!(f32, pp.rect.w, 10.0, epsilon = EPS));
            assert!(approx_eq!(f32, pp.rect.h, 15.0, epsilon = EPS));
            assert!(pp.rotated);
        }
    }

    #[test_case(4000, 3000, true ; "landscape photo swaps portrait slot")]
    #[test_case(3000, 4000, false ; "portrait photo keeps portrait slot")]
    #[test_case(2400, 2400, false ; "square photo keeps natural slot")]
    #[test_case(0, 0, false ; "unknown dimensions keep natural slot")]
    fn auto_orientation(px_w: u32, px_h: u32, expect_swap: bool) {
        let natural = StandardFormat::P10x15.dims_cm();
        let photo = Photo::new(0, px_w, px_h, 1).unwrap();
        let (slot, rotated) = oriented_slot(natural, &photo, OrientationPolicy::Auto);

        assert_eq!(rotated, expect_swap);
        match expect_swap {
            true => {
                assert!(approx_eq!(f32, slot.w, natural.h, epsilon = EPS));
                assert!(approx_eq!(f32, slot.h, natural.w, epsilon = EPS));
            }
            false => {
                assert!(approx_eq!(f32, slot.w, natural.w, epsilon = EPS));
                assert!(approx_eq!(f32, slot.h, natural.h, epsilon = EPS));
            }
        }
    }

    #[test]
    fn copies_conserved_and_slots_disjoint() {
        let settings = PrintSettings {
            format: PrintFormat::Standard(StandardFormat::P9x13),
            ..PrintSettings::default()
        };
        let job = build_job(
            &[(4000, 3000, 5), (3000, 4000, 3), (0, 0, 2), (2000, 2000, 4)],
            settings,
            Sheet::A4,
        );
        let pages = pack(&job);

        assert!(assertions::pages_conserve_copies(&job, &pages));
        for page in &pages {
            assert!(assertions::no_slot_overlap(page));
            assert!(assertions::slots_within_printable(
                page,
                job.sheet,
                job.settings.margin
            ));
        }
    }

    #[test]
    fn repacking_is_deterministic() {
        let job = build_job(
            &[(4000, 3000, 3), (3000, 4000, 2), (0, 0, 1)],
            PrintSettings::default(),
            Sheet::A4,
        );
        let a = pack(&job);
        let b = pack(&job);

        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(pa.placed, pb.placed);
        }
    }

    #[test]
    fn input_order_is_preserved() {
        let job = build_job(
            &[(4000, 3000, 2), (3000, 4000, 1), (2000, 2000, 3)],
            PrintSettings::default(),
            Sheet::A4,
        );
        let pages = pack(&job);

        let ids: Vec<usize> = pages
            .iter()
            .flat_map(|p| &p.placed)
            .map(|pp| job.photo(pp.key).id)
            .collect();
        assert_eq!(ids, vec![0, 0, 1, 2, 2, 2]);
    }

    #[test]
    fn content_is_centered_symmetrically() {
        let job = build_job(
            &[(4000, 3000, 4), (3000, 4000, 3)],
            PrintSettings::default(),
            Sheet::A4,
        );
        let pages = pack(&job);

        for page in &pages {
            let (min_x, max_x) = page.x_extent().unwrap();
            let left_gap = min_x;
            let right_gap = job.sheet.width - max_x;
            assert!(approx_eq!(f32, left_gap, right_gap, epsilon = EPS));
        }
    }

    #[test]
    fn oversized_slot_overflows_instead_of_dropping() {
        // 25x30cm slot on a 21cm wide sheet: placed and overflowing
        // symmetrically after centering
        let settings = PrintSettings {
            format: PrintFormat::Custom {
                width: 25.0,
                height: 30.0,
                unit: LengthUnit::Cm,
            },
            orientation: OrientationPolicy::Portrait,
            ..PrintSettings::default()
        };
        let job = build_job(&[(0, 0, 2)], settings, Sheet::A4);
        let pages = pack(&job);

        assert!(assertions::pages_conserve_copies(&job, &pages));
        assert_eq!(pages.len(), 2);
        for page in &pages {
            let pp = &page.placed[0];
            assert!(approx_eq!(f32, pp.rect.w, 25.0, epsilon = EPS));
            assert!(approx_eq!(f32, pp.rect.x, -2.0, epsilon = EPS));
        }
    }

    #[test_case(0.402, true ; "overshoot below tolerance fits")]
    #[test_case(0.410, false ; "overshoot above tolerance wraps")]
    fn row_boundary_uses_half_pixel_tolerance(spacing: f32, same_row: bool) {
        // two 10cm slots: the second ends at 20.3 + spacing, the margin line
        // sits at 20.7. An overshoot smaller than CM_TOL still fits
        let settings = PrintSettings {
            spacing,
            margin: 0.3,
            ..PrintSettings::default()
        };
        let overshoot = (0.3 + 10.0 + spacing + 10.0) - (Sheet::A4.width - 0.3);
        assert_eq!(overshoot < CM_TOL, same_row);

        let job = build_job(&[(0, 0, 2)], settings, Sheet::A4);
        let pages = pack(&job);

        let placed: Vec<_> = pages.iter().flat_map(|p| &p.placed).collect();
        let on_same_row = placed[0].rect.y == placed[1].rect.y && pages.len() == 1;
        assert_eq!(on_same_row, same_row);
    }

    #[test]
    fn empty_job_yields_no_pages() {
        let job = PrintJob::new(PrintSettings::default(), Sheet::A4).unwrap();
        let pages = pack(&job);
        assert!(pages.is_empty());
    }

    #[test]
    fn full_rows_split_across_pages() {
        // A4 holds a single row of two 10x15 slots, so 7 copies need 4 pages
        let job = build_job(&[(0, 0, 7)], PrintSettings::default(), Sheet::A4);
        let pages = pack(&job);

        let counts: Vec<usize> = pages.iter().map(|p| p.placed.len()).collect();
        assert_eq!(counts, vec![2, 2, 2, 1]);
    }

    #[test]
    fn unknown_dims_square_photo_treated_alike() {
        // a square photo and an unknown one produce identical slot shapes
        // under every policy
        let natural = StandardFormat::P13x18.dims_cm();
        for policy in [
            OrientationPolicy::Auto,
            OrientationPolicy::Portrait,
            OrientationPolicy::Landscape,
        ] {
            let square = Photo::new(0, 1000, 1000, 1).unwrap();
            let unknown = Photo::new(1, 0, 0, 1).unwrap();
            assert_eq!(
                oriented_slot(natural, &square, policy),
                oriented_slot(natural, &unknown, policy)
            );
        }
    }

    #[test]
    fn late_resolved_dims_swap_orientation_on_relayout() {
        // dimensions arriving after a first layout are written back through
        // the photo's key and a second pack picks up the new orientation
        let mut job = PrintJob::new(PrintSettings::default(), Sheet::A4).unwrap();
        let key = job.add_photo(Photo::new(0, 0, 0, 1).unwrap());

        let before = pack(&job);
        let slot = &before[0].placed[0];
        assert!(!slot.rotated);
        assert!(approx_eq!(f32, slot.rect.w, 10.0, epsilon = EPS));

        job.set_photo_dims(key, 4000, 3000);
        let after = pack(&job);
        let slot = &after[0].placed[0];
        assert!(slot.rotated);
        assert!(approx_eq!(f32, slot.rect.w, 15.0, epsilon = EPS));
        assert!(approx_eq!(f32, slot.rect.h, 10.0, epsilon = EPS));
    }

    #[test]
    fn settings_validation_rejects_garbage() {
        let negative_margin = PrintSettings {
            margin: -1.0,
            ..PrintSettings::default()
        };
        assert!(PrintJob::new(negative_margin, Sheet::A4).is_err());

        let degenerate_format = PrintSettings {
            format: PrintFormat::Custom {
                width: 0.0,
                height: 10.0,
                unit: LengthUnit::Cm,
            },
            ..PrintSettings::default()
        };
        assert!(PrintJob::new(degenerate_format, Sheet::A4).is_err());

        assert!(Photo::new(0, 100, 100, 0).is_err());
        assert!(Sheet::try_new(-21.0, 29.7).is_err());
    }
}
