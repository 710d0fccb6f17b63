//! Repoinit operation model.
//!
//! Parsed repoinit scripts dispatch to an [`OperationVisitor`]. Every
//! visitor method has an empty default body, so an implementor overrides
//! only the operation kinds it reacts to.

use serde::{Deserialize, Serialize};

use crate::acl::AclEntry;
use crate::path::RepoPath;

/// A parsed repoinit operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    CreateGroup {
        name: String,
    },
    DeleteGroup {
        name: String,
    },
    CreateUser {
        name: String,
    },
    DeleteUser {
        name: String,
    },
    CreateServiceUser {
        name: String,
    },
    DeleteServiceUser {
        name: String,
    },
    DisableServiceUser {
        name: String,
        reason: String,
    },
    SetAclPrincipals {
        principals: Vec<String>,
        entries: Vec<AclEntry>,
    },
    SetAclPaths {
        paths: Vec<RepoPath>,
        entries: Vec<AclEntry>,
    },
    SetAclPrincipalBased {
        principals: Vec<String>,
        entries: Vec<AclEntry>,
    },
    EnsureAclPrincipalBased {
        principals: Vec<String>,
        entries: Vec<AclEntry>,
    },
    RemoveAcePrincipals {
        principals: Vec<String>,
        entries: Vec<AclEntry>,
    },
    RemoveAcePaths {
        paths: Vec<RepoPath>,
        entries: Vec<AclEntry>,
    },
    RemoveAcePrincipalBased {
        principals: Vec<String>,
        entries: Vec<AclEntry>,
    },
    DeleteAclPrincipals {
        principals: Vec<String>,
    },
    DeleteAclPaths {
        paths: Vec<RepoPath>,
    },
    DeleteAclPrincipalBased {
        principals: Vec<String>,
    },
    CreatePath {
        path: RepoPath,
        primary_type: Option<String>,
    },
    EnsureNodes {
        path: RepoPath,
        primary_type: Option<String>,
    },
    RegisterNamespace {
        prefix: String,
        uri: String,
    },
    RegisterNodetypes {
        cnd: String,
    },
    RegisterPrivilege {
        name: String,
        aggregates: Vec<String>,
    },
    AddGroupMembers {
        group: String,
        members: Vec<String>,
    },
    RemoveGroupMembers {
        group: String,
        members: Vec<String>,
    },
    SetProperties {
        paths: Vec<RepoPath>,
        properties: Vec<(String, String)>,
    },
    AddMixins {
        paths: Vec<RepoPath>,
        mixins: Vec<String>,
    },
    RemoveMixins {
        paths: Vec<RepoPath>,
        mixins: Vec<String>,
    },
}

impl Operation {
    /// Dispatch this operation to the matching visitor method.
    pub fn dispatch<V: OperationVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Self::CreateGroup { name } => visitor.on_create_group(name),
            Self::DeleteGroup { name } => visitor.on_delete_group(name),
            Self::CreateUser { name } => visitor.on_create_user(name),
            Self::DeleteUser { name } => visitor.on_delete_user(name),
            Self::CreateServiceUser { name } => visitor.on_create_service_user(name),
            Self::DeleteServiceUser { name } => visitor.on_delete_service_user(name),
            Self::DisableServiceUser { name, reason } => {
                visitor.on_disable_service_user(name, reason);
            }
            Self::SetAclPrincipals {
                principals,
                entries,
            } => visitor.on_set_acl_principals(principals, entries),
            Self::SetAclPaths { paths, entries } => visitor.on_set_acl_paths(paths, entries),
            Self::SetAclPrincipalBased {
                principals,
                entries,
            } => visitor.on_set_acl_principal_based(principals, entries),
            Self::EnsureAclPrincipalBased {
                principals,
                entries,
            } => visitor.on_ensure_acl_principal_based(principals, entries),
            Self::RemoveAcePrincipals {
                principals,
                entries,
            } => visitor.on_remove_ace_principals(principals, entries),
            Self::RemoveAcePaths { paths, entries } => {
                visitor.on_remove_ace_paths(paths, entries);
            }
            Self::RemoveAcePrincipalBased {
                principals,
                entries,
            } => visitor.on_remove_ace_principal_based(principals, entries),
            Self::DeleteAclPrincipals { principals } => {
                visitor.on_delete_acl_principals(principals);
            }
            Self::DeleteAclPaths { paths } => visitor.on_delete_acl_paths(paths),
            Self::DeleteAclPrincipalBased { principals } => {
                visitor.on_delete_acl_principal_based(principals);
            }
            Self::CreatePath { path, primary_type } => {
                visitor.on_create_path(path, primary_type.as_deref());
            }
            Self::EnsureNodes { path, primary_type } => {
                visitor.on_ensure_nodes(path, primary_type.as_deref());
            }
            Self::RegisterNamespace { prefix, uri } => visitor.on_register_namespace(prefix, uri),
            Self::RegisterNodetypes { cnd } => visitor.on_register_nodetypes(cnd),
            Self::RegisterPrivilege { name, aggregates } => {
                visitor.on_register_privilege(name, aggregates);
            }
            Self::AddGroupMembers { group, members } => {
                visitor.on_add_group_members(group, members);
            }
            Self::RemoveGroupMembers { group, members } => {
                visitor.on_remove_group_members(group, members);
            }
            Self::SetProperties { paths, properties } => {
                visitor.on_set_properties(paths, properties);
            }
            Self::AddMixins { paths, mixins } => visitor.on_add_mixins(paths, mixins),
            Self::RemoveMixins { paths, mixins } => visitor.on_remove_mixins(paths, mixins),
        }
    }
}

/// Receives parsed repoinit operations during script traversal.
///
/// Default bodies are empty; the unmodified trait is a no-op visitor.
#[allow(unused_variables)]
pub trait OperationVisitor {
    fn on_create_group(&mut self, name: &str) {}
    fn on_delete_group(&mut self, name: &str) {}
    fn on_create_user(&mut self, name: &str) {}
    fn on_delete_user(&mut self, name: &str) {}
    fn on_create_service_user(&mut self, name: &str) {}
    fn on_delete_service_user(&mut self, name: &str) {}
    fn on_disable_service_user(&mut self, name: &str, reason: &str) {}
    fn on_set_acl_principals(&mut self, principals: &[String], entries: &[AclEntry]) {}
    fn on_set_acl_paths(&mut self, paths: &[RepoPath], entries: &[AclEntry]) {}
    fn on_set_acl_principal_based(&mut self, principals: &[String], entries: &[AclEntry]) {}
    fn on_ensure_acl_principal_based(&mut self, principals: &[String], entries: &[AclEntry]) {}
    fn on_remove_ace_principals(&mut self, principals: &[String], entries: &[AclEntry]) {}
    fn on_remove_ace_paths(&mut self, paths: &[RepoPath], entries: &[AclEntry]) {}
    fn on_remove_ace_principal_based(&mut self, principals: &[String], entries: &[AclEntry]) {}
    fn on_delete_acl_principals(&mut self, principals: &[String]) {}
    fn on_delete_acl_paths(&mut self, paths: &[RepoPath]) {}
    fn on_delete_acl_principal_based(&mut self, principals: &[String]) {}
    fn on_create_path(&mut self, path: &RepoPath, primary_type: Option<&str>) {}
    fn on_ensure_nodes(&mut self, path: &RepoPath, primary_type: Option<&str>) {}
    fn on_register_namespace(&mut self, prefix: &str, uri: &str) {}
    fn on_register_nodetypes(&mut self, cnd: &str) {}
    fn on_register_privilege(&mut self, name: &str, aggregates: &[String]) {}
    fn on_add_group_members(&mut self, group: &str, members: &[String]) {}
    fn on_remove_group_members(&mut self, group: &str, members: &[String]) {}
    fn on_set_properties(&mut self, paths: &[RepoPath], properties: &[(String, String)]) {}
    fn on_add_mixins(&mut self, paths: &[RepoPath], mixins: &[String]) {}
    fn on_remove_mixins(&mut self, paths: &[RepoPath], mixins: &[String]) {}
}
