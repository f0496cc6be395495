//! 2x2 cluster detection for saplings that grow into square-footed trees.

use crate::core::types::{BlockId, IVec2, IVec3};
use crate::sapling::subtype::{SaplingState, Variant};
use crate::world::Terrain;

/// Candidate corner offsets (X, Z) of a 2x2 cluster containing the
/// triggering cell, in the order they are tried: X outer, Z inner.
pub const CLUSTER_OFFSETS: [IVec2; 4] = [
    IVec2::new(0, 0),
    IVec2::new(0, -1),
    IVec2::new(-1, 0),
    IVec2::new(-1, -1),
];

/// Check whether `pos` holds a `sapling` block of `variant`, mark ignored.
pub fn is_same_sapling(world: &dyn Terrain, pos: IVec3, sapling: BlockId, variant: Variant) -> bool {
    world.block_id(pos) == sapling
        && SaplingState::decode(world.subtype(pos)).is_some_and(|s| s.variant == variant)
}

/// Find a 2x2 cluster of same-variant saplings that includes `origin`.
///
/// Returns the corner offset of the first match in [`CLUSTER_OFFSETS`]
/// order, or `None` when no candidate square is fully populated.
pub fn find_cluster(
    world: &dyn Terrain,
    sapling: BlockId,
    origin: IVec3,
    variant: Variant,
) -> Option<IVec2> {
    CLUSTER_OFFSETS.iter().copied().find(|offset| {
        let corner = origin + IVec3::new(offset.x, 0, offset.y);
        [IVec3::ZERO, IVec3::X, IVec3::Z, IVec3::new(1, 0, 1)]
            .iter()
            .all(|&d| is_same_sapling(world, corner + d, sapling, variant))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{grass_world, put_sapling};
    use crate::world::{blocks, GridWorld};

    const Y: i32 = 1;

    fn square(world: &mut GridWorld, corner: IVec2, variant: Variant) {
        for (dx, dz) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            let pos = IVec3::new(corner.x + dx, Y, corner.y + dz);
            put_sapling(world, pos, variant, false);
        }
    }

    #[test]
    fn test_lone_sapling_has_no_cluster() {
        let mut world = grass_world();
        put_sapling(&mut world, IVec3::new(0, Y, 0), Variant::Redwood, false);
        assert_eq!(
            find_cluster(&world, blocks::SAPLING, IVec3::new(0, Y, 0), Variant::Redwood),
            None
        );
    }

    #[test]
    fn test_each_offset_found() {
        for offset in CLUSTER_OFFSETS {
            let mut world = grass_world();
            square(&mut world, offset, Variant::Fir);
            assert_eq!(
                find_cluster(&world, blocks::SAPLING, IVec3::new(0, Y, 0), Variant::Fir),
                Some(offset),
                "cluster at {:?}",
                offset
            );
        }
    }

    #[test]
    fn test_zero_offset_takes_priority() {
        let mut world = grass_world();
        // 3x3 block: every candidate square is valid
        for x in -1..=1 {
            for z in -1..=1 {
                put_sapling(&mut world, IVec3::new(x, Y, z), Variant::Redwood, false);
            }
        }
        assert_eq!(
            find_cluster(&world, blocks::SAPLING, IVec3::new(0, Y, 0), Variant::Redwood),
            Some(IVec2::ZERO)
        );
    }

    #[test]
    fn test_z_offset_before_x_offset() {
        let mut world = grass_world();
        square(&mut world, IVec2::new(-1, 0), Variant::Redwood);
        square(&mut world, IVec2::new(0, -1), Variant::Redwood);
        // (0,0) square is missing (1, Y, 1)
        assert!(world.is_empty(IVec3::new(1, Y, 1)));
        assert_eq!(
            find_cluster(&world, blocks::SAPLING, IVec3::new(0, Y, 0), Variant::Redwood),
            Some(IVec2::new(0, -1))
        );
    }

    #[test]
    fn test_x_offset_before_diagonal() {
        let mut world = grass_world();
        square(&mut world, IVec2::new(-1, 0), Variant::Fir);
        square(&mut world, IVec2::new(-1, -1), Variant::Fir);
        assert!(world.is_empty(IVec3::new(0, Y, -1)));
        assert_eq!(
            find_cluster(&world, blocks::SAPLING, IVec3::new(0, Y, 0), Variant::Fir),
            Some(IVec2::new(-1, 0))
        );
    }

    #[test]
    fn test_mark_bit_ignored() {
        let mut world = grass_world();
        put_sapling(&mut world, IVec3::new(0, Y, 0), Variant::Redwood, true);
        put_sapling(&mut world, IVec3::new(1, Y, 0), Variant::Redwood, false);
        put_sapling(&mut world, IVec3::new(0, Y, 1), Variant::Redwood, true);
        put_sapling(&mut world, IVec3::new(1, Y, 1), Variant::Redwood, false);

        assert_eq!(
            find_cluster(&world, blocks::SAPLING, IVec3::new(0, Y, 0), Variant::Redwood),
            Some(IVec2::ZERO)
        );
    }

    #[test]
    fn test_mixed_variants_rejected() {
        let mut world = grass_world();
        square(&mut world, IVec2::ZERO, Variant::Redwood);
        put_sapling(&mut world, IVec3::new(1, Y, 1), Variant::Fir, false);

        assert_eq!(
            find_cluster(&world, blocks::SAPLING, IVec3::new(0, Y, 0), Variant::Redwood),
            None
        );
    }

    #[test]
    fn test_other_block_with_matching_subtype_rejected() {
        let mut world = grass_world();
        square(&mut world, IVec2::ZERO, Variant::Fir);
        // Same low bits, different block
        world.set_block(IVec3::new(1, Y, 0), blocks::LEAVES, Variant::Fir.code());

        assert_eq!(
            find_cluster(&world, blocks::SAPLING, IVec3::new(0, Y, 0), Variant::Fir),
            None
        );
    }

    #[test]
    fn test_corrupt_neighbour_rejected() {
        let mut world = grass_world();
        square(&mut world, IVec2::ZERO, Variant::Fir);
        world.set_block(IVec3::new(0, Y, 1), blocks::SAPLING, 0x14);

        assert!(!is_same_sapling(&world, IVec3::new(0, Y, 1), blocks::SAPLING, Variant::Fir));
        assert_eq!(
            find_cluster(&world, blocks::SAPLING, IVec3::new(0, Y, 0), Variant::Fir),
            None
        );
    }
}
