//! Member registration and payment review.

use crate::server::{
    data::{code_sequence::CodeSequenceRepository, member::MemberRepository},
    error::AppError,
    model::{
        member::{
            CreateMemberParams, Member, MembershipTier, PaymentStatus, Registration,
            RegistrationForm,
        },
        payment::{CheckoutRequest, PaymentSubject},
    },
    provider::asset::AssetKind,
    service::reconcile::ReconciliationService,
    state::AppState,
    util::{code, parse},
};

pub struct MemberService<'a> {
    state: &'a AppState,
}

impl<'a> MemberService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Registers a member under review and prepares their membership payment.
    ///
    /// The form is validated before anything is stored. The proof of payment, when
    /// present, is uploaded as `<uuid>_<file name>` before the member code is
    /// allocated, so a failed upload never consumes a code.
    ///
    /// # Arguments
    /// - `form` - Raw multipart registration form
    ///
    /// # Returns
    /// - `Ok(Registration)` - Created member and the PayFast checkout URL
    /// - `Err(AppError::BadRequest)` - Name or email missing, or tier unknown
    /// - `Err(AppError)` - Upload, code allocation or insert failed
    pub async fn register(&self, form: RegistrationForm) -> Result<Registration, AppError> {
        let (Some(full_name), Some(email)) = (
            parse::non_blank(form.full_name),
            parse::non_blank(form.email),
        ) else {
            return Err(AppError::BadRequest(
                "Missing required member information.".to_string(),
            ));
        };

        let tier = form
            .membership_tier
            .as_deref()
            .and_then(MembershipTier::parse)
            .ok_or_else(|| AppError::BadRequest("Invalid membership tier.".to_string()))?;

        let proof = form.proof_of_payment.filter(|file| !file.bytes.is_empty());
        let proof_of_payment_url = match proof {
            Some(file) => Some(
                self.state
                    .assets
                    .store(
                        AssetKind::ProofOfPayment,
                        &file.unique_name(),
                        file.bytes,
                        file.content_type.as_deref(),
                    )
                    .await?,
            ),
            None => None,
        };

        let member_code = self.allocate_member_code().await?;

        let member = MemberRepository::new(&self.state.db)
            .create(CreateMemberParams {
                member_code,
                full_name,
                email,
                phone_number: parse::non_blank(form.phone_number).unwrap_or_default(),
                branch: parse::non_blank(form.branch).unwrap_or_default(),
                tier,
                proof_of_payment_url,
            })
            .await?;

        let redirect_url = self.state.gateway.checkout_url(&CheckoutRequest {
            subject: PaymentSubject::Member,
            item_name: PaymentSubject::Member.item_name(&member.member_code),
            amount: member.fee,
            name_first: Some(member.full_name.clone()),
            email_address: member.email.clone(),
        })?;

        tracing::info!("Registered member {} ({})", member.member_code, member.tier);

        Ok(Registration {
            member,
            redirect_url,
        })
    }

    /// Allocates the next member code under the configured prefix.
    ///
    /// The sequence is seeded from the highest code already issued the first time
    /// it is used, so codes continue from members created before the sequence.
    async fn allocate_member_code(&self) -> Result<String, AppError> {
        let prefix = &self.state.member_code_prefix;
        let sequences = CodeSequenceRepository::new(&self.state.db);

        let seed = if sequences.exists(prefix).await? {
            0
        } else {
            MemberRepository::new(&self.state.db)
                .highest_code_number(prefix)
                .await?
                .unwrap_or(0)
        };

        let number = sequences.next_value(prefix, seed).await?;

        Ok(code::format_member_code(prefix, number))
    }

    pub async fn get_all(&self) -> Result<Vec<Member>, AppError> {
        MemberRepository::new(&self.state.db).get_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Member>, AppError> {
        MemberRepository::new(&self.state.db).find_by_id(id).await
    }

    /// Applies an admin review decision to a member's payment.
    ///
    /// Accepting runs fulfilment: the card is rendered and stored, then emailed.
    /// Re-accepting an accepted member resumes an interrupted fulfilment. Rejecting
    /// sends nothing.
    ///
    /// # Arguments
    /// - `id` - Member id
    /// - `status` - Requested status name, matched case-insensitively
    ///
    /// # Returns
    /// - `Ok(Member)` - The member after the change
    /// - `Err(AppError::BadRequest)` - Unknown status or disallowed transition
    /// - `Err(AppError::NotFound)` - No member with this id
    pub async fn update_status(&self, id: &str, status: &str) -> Result<Member, AppError> {
        let next = PaymentStatus::parse(status)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid payment status '{}'.", status)))?;

        let repo = MemberRepository::new(&self.state.db);
        let member = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found.".to_string()))?;

        if !member.payment_status.can_transition_to(next) {
            return Err(AppError::BadRequest(format!(
                "Invalid status transition from {} to {}.",
                member.payment_status, next
            )));
        }

        match next {
            PaymentStatus::Accepted => {
                ReconciliationService::new(self.state)
                    .accept_member(&member.id)
                    .await
            }
            PaymentStatus::Rejected => {
                if repo.reject(&member.id).await? {
                    tracing::info!("Rejected member {}", member.member_code);
                }
                repo.find_by_id(&member.id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Member not found.".to_string()))
            }
            PaymentStatus::UnderReview => Ok(member),
        }
    }
}
