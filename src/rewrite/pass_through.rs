//
// PassThrough
//

/// Rewriter that leaves requests and responses untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassThrough;
