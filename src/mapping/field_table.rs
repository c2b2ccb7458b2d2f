// ==========================================
// 空运提单跟踪 - 字段别名表
// ==========================================
// 远程表格的固定契约（不可配置）
// 每个规范字段对应一组有序的外部列名：
//   [0] 表格表头（本地化/带重音，写回时使用）
//   [1] 小写内部名（兼容读取）
// ==========================================

/// 实体类型（每种实体对应一张表）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Shipment,
    User,
}

impl EntityKind {
    /// 远程表名
    pub fn sheet_name(&self) -> &'static str {
        match self {
            EntityKind::Shipment => "AWB",
            EntityKind::User => "CADASTRO USUÁRIO",
        }
    }

    pub fn entity_name(&self) -> &'static str {
        match self {
            EntityKind::Shipment => "shipment",
            EntityKind::User => "user",
        }
    }
}

/// 标识列（外部写法优先）
pub const ID_ALIASES: &[&str] = &["ID", "id"];

/// 写回时使用的标识列
pub const ID_HEADER: &str = "ID";

// ==========================================
// 运单字段
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentField {
    Supplier,
    DispatchDate,
    InvoiceRefs,
    WaybillNumber,
    Status,
    ArrivalDate,
    Brand,
    Material,
    Remark,
    TrackingUrl,
    Documents,
}

impl ShipmentField {
    pub const ALL: [ShipmentField; 11] = [
        ShipmentField::Supplier,
        ShipmentField::DispatchDate,
        ShipmentField::InvoiceRefs,
        ShipmentField::WaybillNumber,
        ShipmentField::Status,
        ShipmentField::ArrivalDate,
        ShipmentField::Brand,
        ShipmentField::Material,
        ShipmentField::Remark,
        ShipmentField::TrackingUrl,
        ShipmentField::Documents,
    ];

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            ShipmentField::Supplier => &["Fornecedor", "fornecedor"],
            ShipmentField::DispatchDate => &["Saída", "saida"],
            ShipmentField::InvoiceRefs => &["NF's", "nfs"],
            ShipmentField::WaybillNumber => &["AWB", "awbNumber"],
            ShipmentField::Status => &["Status", "status"],
            ShipmentField::ArrivalDate => &["Chegada", "chegada"],
            ShipmentField::Brand => &["Marca", "marca"],
            ShipmentField::Material => &["Material", "material"],
            ShipmentField::Remark => &["Observação", "observacao"],
            ShipmentField::TrackingUrl => &["Rastreio", "rastreio"],
            ShipmentField::Documents => &["Documentos", "documentos"],
        }
    }

    /// 表格表头
    pub fn sheet_header(&self) -> &'static str {
        self.aliases()[0]
    }
}

// ==========================================
// 用户字段
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Email,
    Password,
    Role,
    State,
}

impl UserField {
    pub const ALL: [UserField; 5] = [
        UserField::Name,
        UserField::Email,
        UserField::Password,
        UserField::Role,
        UserField::State,
    ];

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            UserField::Name => &["USUÁRIO", "name"],
            UserField::Email => &["E-MAIL", "email"],
            UserField::Password => &["SENHA", "senha"],
            UserField::Role => &["PAPEL", "role"],
            // 账户状态列在表格中本就是小写
            UserField::State => &["status", "STATUS"],
        }
    }

    pub fn sheet_header(&self) -> &'static str {
        self.aliases()[0]
    }
}
