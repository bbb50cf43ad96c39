//! Default landing route per role.

use hourly_core::Role;
use serde::Serialize;

use crate::error::RouteTableError;
use crate::route::RouteTable;

/// Total mapping from role to landing path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleRouteMap {
    pub admin: String,
    pub manager: String,
    pub executor: String,
}

impl RoleRouteMap {
    pub fn standard() -> Self {
        Self {
            admin: "/admin".to_string(),
            manager: "/manager".to_string(),
            executor: "/executor".to_string(),
        }
    }

    pub fn route_for(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin,
            Role::Manager => &self.manager,
            Role::Executor => &self.executor,
        }
    }

    /// Check that every landing path is a route its role may open.
    pub fn validate(&self, routes: &RouteTable) -> Result<(), RouteTableError> {
        for role in Role::ALL {
            let path = self.route_for(role);
            let route = routes
                .find(path)
                .ok_or_else(|| RouteTableError::MissingLanding(path.to_string()))?;
            if route.required_role.is_some_and(|required| required != role) {
                return Err(RouteTableError::ForeignLanding {
                    role,
                    path: path.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for RoleRouteMap {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_targets_exist_and_match_role() {
        let map = RoleRouteMap::standard();
        let table = RouteTable::standard();
        for role in Role::ALL {
            let route = table.find(map.route_for(role)).unwrap();
            assert_eq!(route.required_role, Some(role));
        }
        assert_eq!(map.validate(&table), Ok(()));
    }

    #[test]
    fn test_validate_rejects_unknown_landing() {
        let map = RoleRouteMap {
            executor: "/nowhere".into(),
            ..RoleRouteMap::standard()
        };
        assert_eq!(
            map.validate(&RouteTable::standard()),
            Err(RouteTableError::MissingLanding("/nowhere".into()))
        );
    }

    #[test]
    fn test_validate_rejects_landing_for_other_role() {
        let map = RoleRouteMap {
            manager: "/admin".into(),
            ..RoleRouteMap::standard()
        };
        assert_eq!(
            map.validate(&RouteTable::standard()),
            Err(RouteTableError::ForeignLanding {
                role: Role::Manager,
                path: "/admin".into()
            })
        );
    }

    #[test]
    fn test_validate_accepts_shared_landing() {
        let map = RoleRouteMap {
            executor: "/dashboard".into(),
            ..RoleRouteMap::standard()
        };
        assert_eq!(map.validate(&RouteTable::standard()), Ok(()));
    }
}
