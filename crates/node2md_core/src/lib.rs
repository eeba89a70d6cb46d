//! node2md core: pure content transformation pipeline.
//!
//! Every function in this crate is a pure transformation of its inputs. I/O
//! (reading the content database, writing files) lives in `node2md_engine`.
mod assets;
mod convert;
mod frontmatter;
mod pipeline;
mod slug;
mod types;
mod yaml_list;

pub use assets::{
    rewrite_body_references, AssetRewriter, DEFAULT_COVER_PREFIX, DEFAULT_STORAGE_SCHEME,
};
pub use convert::{Converter, Html2MdConverter};
pub use frontmatter::{assemble, format_created, FrontMatter, RenderedDocument};
pub use pipeline::{ExportedDocument, Pipeline};
pub use slug::{file_name_for, slugify};
pub use types::{ContentRecord, NodeId, RecordAssets, TargetPath};
pub use yaml_list::format_list;
