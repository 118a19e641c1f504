//! Wire DTOs. Field names are camelCase on the wire for client
//! compatibility (`familyCode`, `createdAt`, `parentId`, `kidId`).

pub mod request;
pub mod response;
