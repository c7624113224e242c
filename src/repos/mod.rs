/**
 * Content Repositories
 * One repository per collection. Each owns its entity's shape, defaulting
 * and entity-local invariants, and wraps the document store for that
 * collection only.
 */
pub mod blog;
pub mod brochure;
pub mod portfolio;
pub mod tag;

pub use blog::{BlogPatch, BlogRepo, NewBlogPost};
pub use brochure::{BrochureRepo, NewBrochure};
pub use portfolio::{PortfolioFields, PortfolioRepo};
pub use tag::TagRepo;
