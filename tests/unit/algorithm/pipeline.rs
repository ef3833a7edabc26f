//! Tests for end-to-end reconstruction of a single image

#[cfg(test)]
mod tests {
    use crate::ramp;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use unshred::algorithm::chain::Anchor;
    use unshred::algorithm::pipeline::Stage;
    use unshred::algorithm::scores::ScoreTable;
    use unshred::algorithm::shuffle::{arrange_shreds, inverse_placement, shuffle_shreds};
    use unshred::algorithm::slicer::slice_shreds;
    use unshred::{PixelGrid, UnshredConfig, UnshredError, Unshredder};

    fn unshredder(shred_width: usize, strict: bool) -> Unshredder {
        Unshredder::new(UnshredConfig {
            shred_width,
            strict,
        })
    }

    // Three shreds whose border colors make the left edge lose its right claim
    fn broken_grid() -> PixelGrid {
        let reds = [0u8, 50, 60, 53, 52, 200];
        PixelGrid::from_fn(6, 3, |x, _| [reds[x], 0, 0])
    }

    // Shuffling then unshredding restores the original pixels
    #[test]
    fn test_recovers_shuffled_image() {
        let original = ramp(128, 10);
        let mut rng = StdRng::seed_from_u64(2024);
        let (shuffled, placement) = shuffle_shreds(&original, 16, &mut rng).unwrap();

        let result = unshredder(16, true).run(&shuffled).unwrap();

        assert!(result.is_complete());
        assert_eq!(result.order(), inverse_placement(&placement).as_slice());
        assert_eq!(result.image, original);
        assert_eq!(result.chain.anchor(), Anchor::LeftEdge);
    }

    // Originals 2, 0, 3, 1 laid out left to right are put back as 1, 3, 0, 2
    #[test]
    fn test_four_shred_scenario() {
        let original = ramp(128, 8);
        let shuffled = arrange_shreds(&original, 32, &[2, 0, 3, 1]).unwrap();

        let result = unshredder(32, false).run(&shuffled).unwrap();

        assert_eq!(result.order(), &[1, 3, 0, 2]);
        assert_eq!(result.image, original);

        let table = ScoreTable::from_shreds(&slice_shreds(&shuffled, 32).unwrap());
        let adjacent = [(1, 3), (3, 0), (0, 2)];
        let worst_adjacent = adjacent
            .iter()
            .map(|&(i, j)| table.right(i, j).unwrap())
            .max()
            .unwrap();
        for i in 0..4 {
            for j in 0..4 {
                if i != j && !adjacent.contains(&(i, j)) {
                    assert!(table.right(i, j).unwrap() > worst_adjacent, "right[{i}][{j}]");
                    assert!(table.left(j, i).unwrap() > worst_adjacent, "left[{j}][{i}]");
                }
            }
        }
    }

    // Running twice over the same input gives identical output
    #[test]
    fn test_reconstruction_repeatable() {
        let shuffled = arrange_shreds(&ramp(128, 4), 32, &[3, 1, 0, 2]).unwrap();
        let unshredder = Unshredder::new(UnshredConfig::default());

        let first = unshredder.run(&shuffled).unwrap();
        let second = unshredder.run(&shuffled).unwrap();

        assert_eq!(first.image, second.image);
        assert_eq!(first.order(), second.order());
    }

    // Two shreds give no duplicate claims and fail cleanly
    #[test]
    fn test_two_shreds_unresolved() {
        let result = unshredder(32, false).run(&ramp(64, 4));

        assert!(matches!(
            result,
            Err(UnshredError::UnresolvedEdge { shreds: 2 })
        ));
    }

    // A broken chain still produces a narrower image by default
    #[test]
    fn test_broken_chain_partial_output() {
        let result = unshredder(2, false).run(&broken_grid()).unwrap();

        assert!(!result.is_complete());
        assert_eq!(result.order(), &[0]);
        assert_eq!(result.image.width(), 2);
        assert_eq!(result.neighbors.left_edge(), Some(0));
    }

    // Strict mode turns a broken chain into an error
    #[test]
    fn test_broken_chain_strict() {
        let result = unshredder(2, true).run(&broken_grid());

        assert!(matches!(
            result,
            Err(UnshredError::BrokenChain {
                expected: 3,
                found: 1
            })
        ));
    }

    // Invalid widths fail before any matching work
    #[test]
    fn test_configuration_errors() {
        let zero = unshredder(0, false).run(&ramp(64, 2)).unwrap_err();
        let wide = unshredder(64, false).run(&ramp(64, 2)).unwrap_err();

        assert!(zero.is_configuration());
        assert!(wide.is_configuration());
    }

    // Stages are reported in execution order, without the write stage
    #[test]
    fn test_stage_reporting() {
        let shuffled = arrange_shreds(&ramp(96, 2), 32, &[1, 2, 0]).unwrap();
        let mut stages = Vec::new();

        let result = unshredder(32, false).run_with_progress(&shuffled, |stage| stages.push(stage));

        assert!(result.is_ok());
        assert_eq!(
            stages,
            vec![Stage::Slice, Stage::Score, Stage::Resolve, Stage::Arrange]
        );
        assert_eq!(Stage::Write.step(), Stage::ALL.len());
        assert_eq!(Stage::Resolve.to_string(), "resolve");
    }

    // Defaults match the documented shred width
    #[test]
    fn test_default_config() {
        let config = UnshredConfig::default();

        assert_eq!(config.shred_width, 32);
        assert!(!config.strict);
        assert_eq!(Unshredder::default().config(), &config);
    }
}
