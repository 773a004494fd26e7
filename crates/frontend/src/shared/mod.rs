pub mod clock;
pub mod dom;
pub mod loader;
pub mod markup;
pub mod popup;
pub mod storage;
pub mod svg_cache;
pub mod theme;

#[cfg(test)]
pub mod testing;
