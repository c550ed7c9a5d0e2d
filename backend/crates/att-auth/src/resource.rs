use att_core::{StudentId, TenantId};

use std::fmt;

/// Policy-engine object a permission is checked against.
///
/// Object ids are prefixed with the tenant so tuples from different
/// colleges can never satisfy each other's checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub namespace: String,
    pub object: String,
}

impl Resource {
    pub const STUDENTS: &'static str = "students";

    pub fn new(namespace: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            object: object.into(),
        }
    }

    pub fn student(tenant_id: TenantId, student_id: StudentId) -> Self {
        Self::new(Self::STUDENTS, scoped_object(tenant_id, student_id))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.object)
    }
}

/// `<tenant>:<object>` form used for every tuple this service writes or checks
pub fn scoped_object(tenant_id: TenantId, object: impl fmt::Display) -> String {
    format!("{tenant_id}:{object}")
}
