use foldtree_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using FolderTreeError
pub type Result<T> = std::result::Result<T, FolderTreeError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable code. The request layer translates codes into
/// user-facing messages and status codes; the engine never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    InvalidName,
    DuplicateName,
    DepthExceeded,
    NotFound,
    SelfMove,
    CyclicMove,

    // Boundary
    Serialization,
    InvalidConfig,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidName => "ERR_INVALID_NAME",
            ExErrorKind::DuplicateName => "ERR_DUPLICATE_NAME",
            ExErrorKind::DepthExceeded => "ERR_DEPTH_EXCEEDED",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::SelfMove => "ERR_SELF_MOVE",
            ExErrorKind::CyclicMove => "ERR_CYCLIC_MOVE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus enough context (operation, node id,
/// correlation ids) for the caller to report the failure without re-parsing
/// the message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " op={}", op)?;
        }
        if let Some(id) = &self.entity_id {
            write!(f, " node={}", id)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for folder-tree operations
///
/// All variants except `Serialization` and `InvalidConfig` are local
/// validation failures raised by the tree operations themselves. None of them
/// is transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FolderTreeError {
    /// Name is empty or longer than the limit once trimmed
    #[error("Invalid folder name {name:?}: trimmed length {len} is outside 1..=50")]
    InvalidName { name: String, len: usize },

    /// A sibling already uses the (trimmed) name
    #[error("Duplicate folder name {name:?} among siblings")]
    DuplicateName {
        name: String,
        parent_id: Option<String>,
    },

    /// The resulting forest would be deeper than allowed
    #[error("Maximum nesting depth {max_depth} exceeded (depth {depth})")]
    DepthExceeded { max_depth: usize, depth: usize },

    #[error("Parent folder not found: {parent_id}")]
    ParentNotFound { parent_id: String },

    #[error("Folder not found: {node_id}")]
    NodeNotFound { node_id: String },

    #[error("Cannot move folder {node_id} into itself")]
    SelfMove { node_id: String },

    #[error("Cannot move folder {node_id} under its descendant {new_parent_id}")]
    CyclicMove {
        node_id: String,
        new_parent_id: String,
    },

    /// Stored or submitted JSON does not have the forest shape
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl FolderTreeError {
    /// Classification of this error in the canonical taxonomy
    pub fn kind(&self) -> ExErrorKind {
        match self {
            FolderTreeError::InvalidName { .. } => ExErrorKind::InvalidName,
            FolderTreeError::DuplicateName { .. } => ExErrorKind::DuplicateName,
            FolderTreeError::DepthExceeded { .. } => ExErrorKind::DepthExceeded,
            FolderTreeError::ParentNotFound { .. } | FolderTreeError::NodeNotFound { .. } => {
                ExErrorKind::NotFound
            }
            FolderTreeError::SelfMove { .. } => ExErrorKind::SelfMove,
            FolderTreeError::CyclicMove { .. } => ExErrorKind::CyclicMove,
            FolderTreeError::Serialization { .. } => ExErrorKind::Serialization,
            FolderTreeError::InvalidConfig { .. } => ExErrorKind::InvalidConfig,
        }
    }
}

impl From<FolderTreeError> for ExError {
    fn from(err: FolderTreeError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        let base = ExError::new(kind).with_message(message);
        match err {
            FolderTreeError::ParentNotFound { parent_id } => {
                base.with_entity_id(parent_id).with_op("find_parent")
            }
            FolderTreeError::NodeNotFound { node_id }
            | FolderTreeError::SelfMove { node_id }
            | FolderTreeError::CyclicMove { node_id, .. } => base.with_entity_id(node_id),
            FolderTreeError::DuplicateName {
                parent_id: Some(parent_id),
                ..
            } => base.with_entity_id(parent_id),
            _ => base,
        }
    }
}

impl From<serde_json::Error> for FolderTreeError {
    fn from(err: serde_json::Error) -> Self {
        FolderTreeError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FolderTreeError {
    fn from(err: toml::de::Error) -> Self {
        FolderTreeError::InvalidConfig {
            message: err.to_string(),
        }
    }
}
