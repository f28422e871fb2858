use uuid::Uuid;

use crate::domain::repository::{IdentityPort, ProfileRepository};
use crate::error::AdminServiceError;

/// Why a request was turned away before reaching a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardRejection {
    /// No usable session. Send the caller to the login page.
    Login,
    /// Valid session, but the profile is not a superadmin.
    Unauthorized,
}

/// Identity of the authenticated superadmin, inserted as a request
/// extension by the guard middleware.
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub profile_id: Uuid,
    pub email: String,
}

/// Resolves a session token to a superadmin identity.
///
/// Runs once per request, before any data access. A missing or expired
/// session rejects to login; a valid session without the superadmin flag
/// rejects to the unauthorized page.
pub struct AuthorizeAdminUseCase<I, P> {
    pub identity: I,
    pub profile_repo: P,
}

impl<I, P> AuthorizeAdminUseCase<I, P>
where
    I: IdentityPort,
    P: ProfileRepository,
{
    pub async fn execute(
        &self,
        session_token: Option<&str>,
    ) -> Result<Result<AdminIdentity, GuardRejection>, AdminServiceError> {
        let Some(token) = session_token else {
            return Ok(Err(GuardRejection::Login));
        };

        let Some(user) = self.identity.current_user(token).await? else {
            return Ok(Err(GuardRejection::Login));
        };

        let Some(profile) = self.profile_repo.find_by_id(user.id).await? else {
            return Ok(Err(GuardRejection::Unauthorized));
        };

        if !profile.is_superadmin {
            return Ok(Err(GuardRejection::Unauthorized));
        }

        Ok(Ok(AdminIdentity {
            profile_id: profile.id,
            email: profile.email,
        }))
    }
}
