pub mod friend;
pub mod member;
pub mod plan;
pub mod team;

/*
 Members send each other friend requests. A request is a single directed row
 (applicant -> respondent) that starts in WAIT and is either accepted (ACTIVE)
 or refused (DELETE). Refused rows stay around; a new request makes a new row.

 Teams own plans. A plan has one manager (a member) and a calendar date.
 Plans are soft-deleted by flipping their status.
 */
