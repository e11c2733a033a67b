// Defaults for parameters
const SEED_DEFAULT: usize = 0;

/// Configuration of the Prim's solver. Only use if you want to grow the tree from a vertex
/// other than the first point. Otherwise use `PrimsMst::default_params()`.
#[derive(Debug, Clone, PartialEq)]
pub struct MstParams {
    pub(crate) seed: usize,
}

/// Builder object to set custom parameters.
pub struct MstParamBuilder {
    seed: Option<usize>,
}

impl Default for MstParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl MstParams {
    /// Enters the builder pattern, allowing custom parameters to be set using setter methods.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn builder() -> MstParamBuilder {
        MstParamBuilder { seed: None }
    }
}

impl MstParamBuilder {
    /// Sets the seed - the index of the point the spanning tree is grown from. The seed changes
    /// the shape of the tree that is found but never its total cost. Must be the index of one of
    /// the input points, which is checked when the tree is built. Defaults to 0.
    ///
    /// # Parameters
    /// * seed - the index of the starting point
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn seed(mut self, seed: usize) -> MstParamBuilder {
        self.seed = Some(seed);
        self
    }

    /// Finishes the building of the parameter configuration.
    ///
    /// # Returns
    /// * The completed solver parameters.
    pub fn build(self) -> MstParams {
        MstParams {
            seed: self.seed.unwrap_or(SEED_DEFAULT),
        }
    }
}
