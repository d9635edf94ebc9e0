//! Syntax kinds for the analyzed language.
//!
//! `SyntaxKind` serves dual roles: token kinds and node kinds. Tokens come
//! first, then nodes, then the `__LAST` sentinel. `FirnLang` implements
//! Rowan's `Language` trait so both the green and red trees speak it.

use rowan::Language;

/// All token and node kinds. `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    LParen = 0,
    RParen,
    LBrace,
    RBrace,
    Lt,
    Gt,
    Comma,
    Colon,
    Semicolon,
    Dot,
    Eq,
    Arrow,
    At,

    FunKw,
    ValKw,
    VarKw,
    ClassKw,
    ObjectKw,
    InitKw,
    ConstructorKw,
    GetKw,
    SetKw,
    TypealiasKw,
    WhileKw,
    DoKw,
    ForKw,
    InKw,
    ReturnKw,
    BreakKw,
    ContinueKw,
    ThisKw,
    PublicKw,
    PrivateKw,
    InternalKw,
    ProtectedKw,

    Ident,
    IntLiteral,

    Whitespace,
    Newline,
    LineComment,
    BlockComment,
    /// Unrecognized input, kept so the tree stays lossless.
    Garbage,

    // --- Node kinds (non-terminals) ---
    File,
    Modifiers,
    Class,
    ObjectDeclaration,
    ObjectLiteral,
    ClassBody,
    PrimaryConstructor,
    SecondaryConstructor,
    ClassInitializer,
    TypeAlias,
    Fun,
    ParameterList,
    Parameter,
    TypeRef,
    Property,
    PropertyAccessor,
    Block,
    Lambda,
    AnonymousFun,
    /// `name@ expr`: wraps a [`LabelQualifier`](Self::LabelQualifier) and the labeled body.
    LabeledExpression,
    LabelQualifier,
    /// The `name@` part of a labeled expression.
    Label,
    /// The `@name` part of `return@name`, `break@name`, `this@name`.
    TargetLabel,
    Annotated,
    Annotation,
    WhileLoop,
    DoWhileLoop,
    ForLoop,
    Condition,
    Return,
    Break,
    Continue,
    This,
    Call,
    ValueArguments,
    Paren,
    Literal,
    NameRef,
    Error,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) < (File as u16)
    }

    /// Node kinds that own a declaration in the resolved IR.
    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            Class
                | ObjectDeclaration
                | ObjectLiteral
                | PrimaryConstructor
                | SecondaryConstructor
                | ClassInitializer
                | TypeAlias
                | Fun
                | AnonymousFun
                | Lambda
                | Property
                | PropertyAccessor
        )
    }

    /// Keyword text, if this kind is a (hard or soft) keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        let text = match self {
            FunKw => "fun",
            ValKw => "val",
            VarKw => "var",
            ClassKw => "class",
            ObjectKw => "object",
            InitKw => "init",
            ConstructorKw => "constructor",
            GetKw => "get",
            SetKw => "set",
            TypealiasKw => "typealias",
            WhileKw => "while",
            DoKw => "do",
            ForKw => "for",
            InKw => "in",
            ReturnKw => "return",
            BreakKw => "break",
            ContinueKw => "continue",
            ThisKw => "this",
            PublicKw => "public",
            PrivateKw => "private",
            InternalKw => "internal",
            ProtectedKw => "protected",
            _ => return None,
        };
        Some(text)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FirnLang {}

impl Language for FirnLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<FirnLang>;
pub type SyntaxToken = rowan::SyntaxToken<FirnLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;
