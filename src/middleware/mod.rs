//! Middleware and extractors for authentication and authorization.
//!
//! # Request pipeline
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::AuthUser`] verifies the token and resolves the caller's
//!    identity from the store (401 on any failure)
//! 3. [`role`] checks confirm the identity holds an allowed role (403)
//! 4. Ownership checks compare the identity against the resource owner
//!    (403), after the resource's existence is confirmed (404)
//!
//! The ordering is enforced by construction: role and ownership checks
//! take an [`auth::AuthUser`], which only exists once authentication
//! has succeeded.

pub mod auth;
pub mod role;
