use anchor_lang::error_code;

#[error_code]
pub enum LotteryError {
    Overflow,
    InsufficientFunds,
    NotOperator,
    SoldOut,
    #[msg("Input is not a number")]
    InvalidNumber,
    #[msg("Number must be greater than zero")]
    NumberOutOfRange,
    #[msg("Prize count exceeds the maximum number of prize slots")]
    TooManyPrizes,
    #[msg("Could not recognize a duration in the input")]
    InvalidDuration,
    #[msg("Minimum lottery duration is 60 seconds")]
    DurationTooShort,
    #[msg("Announcement text cannot be empty")]
    EmptyAnnouncement,
    #[msg("Announcement text exceeds maximum length of 256 characters")]
    AnnouncementTooLong,
    #[msg("Display name exceeds maximum length")]
    NameTooLong,
    #[msg("The draft is not at the step this input belongs to")]
    WrongDraftStep,
    #[msg("The draft is missing a parameter from an earlier step")]
    DraftIncomplete,
    #[msg("Lottery is not in the active set")]
    LotteryNotActive,
    #[msg("Invalid SlotHashes account provided")]
    InvalidSlotHashesAccount,
}
