use crate::{
    algorithm::bitset::TileBitset,
    spatial::direction::Direction,
    spatial::tiles::{EdgeSignature, TileCatalog},
};

/// Precomputed edge index over a catalog
///
/// For every side and signature, holds the set of tiles presenting that
/// signature on that side. Propagation reduces to bitset unions and
/// intersections against these sets instead of rescanning tiles.
#[derive(Clone, Debug)]
pub struct EdgeCache {
    by_side: Vec<[TileBitset; 2]>,
    tile_count: usize,
}

impl EdgeCache {
    /// Index every tile of the catalog by side and signature
    pub fn new(catalog: &TileCatalog) -> Self {
        let tile_count = catalog.len();
        let mut by_side = vec![
            [TileBitset::new(tile_count), TileBitset::new(tile_count)];
            Direction::ALL.len()
        ];

        for (index, tile) in catalog.tiles().iter().enumerate() {
            for direction in Direction::ALL {
                if let Some(sets) = by_side.get_mut(direction.index()) {
                    if let Some(set) = sets.get_mut(tile.edge(direction).index()) {
                        set.insert(index);
                    }
                }
            }
        }

        Self {
            by_side,
            tile_count,
        }
    }

    /// Number of tiles the index covers
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Tiles presenting `signature` on side `direction`
    pub fn tiles_with(&self, direction: Direction, signature: EdgeSignature) -> Option<&TileBitset> {
        self.by_side
            .get(direction.index())
            .and_then(|sets| sets.get(signature.index()))
    }

    /// Signatures shown on side `direction` by at least one tile of `possible`
    pub fn signatures_on(
        &self,
        possible: &TileBitset,
        direction: Direction,
    ) -> impl Iterator<Item = EdgeSignature> {
        EdgeSignature::ALL.into_iter().filter(move |&signature| {
            self.tiles_with(direction, signature)
                .is_some_and(|tiles| tiles.intersects(possible))
        })
    }

    /// Tiles allowed next to a cell holding `possible`, on its `direction` side
    ///
    /// A neighbor tile is allowed when the signature it shows back towards
    /// the cell matches a signature the cell can still show towards it.
    pub fn allowed_neighbors(&self, possible: &TileBitset, direction: Direction) -> TileBitset {
        let facing_back = direction.reverse();
        let mut allowed = TileBitset::new(self.tile_count);
        for signature in self.signatures_on(possible, direction) {
            if let Some(tiles) = self.tiles_with(facing_back, signature) {
                allowed.union_with(tiles);
            }
        }
        allowed
    }
}
